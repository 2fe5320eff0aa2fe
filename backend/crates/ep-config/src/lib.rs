mod backend_config;
mod config;
mod document_store_config;
mod error;
mod identity_config;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use backend_config::BackendConfig;
pub use config::Config;
pub use document_store_config::DocumentStoreConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use identity_config::IdentityConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

pub const CONFIG_DIR_ENV: &str = "EP_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".ep";
pub const CONFIG_FILENAME: &str = "config.toml";

// Backend
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

pub const MIN_HEALTH_TIMEOUT_MS: u64 = 100;
pub const MAX_HEALTH_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_HEALTH_TIMEOUT_MS: u64 = 3_000;

pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

// Identity provider
pub const DEFAULT_IDENTITY_AUTH_URL: &str = "https://identitytoolkit.googleapis.com";
pub const DEFAULT_IDENTITY_TOKEN_URL: &str = "https://securetoken.googleapis.com";

// Document store
pub const DEFAULT_STORE_URL: &str = "https://firestore.googleapis.com";
pub const DEFAULT_STORE_DATABASE: &str = "(default)";

// Logging
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
