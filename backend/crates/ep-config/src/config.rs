use crate::{
    BackendConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DocumentStoreConfig, IdentityConfig, LoggingConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub identity: IdentityConfig,
    pub document_store: DocumentStoreConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. EP_CONFIG_DIR env var, else ./.ep/
    /// 2. Auto-create the config directory if missing
    /// 3. config.toml if present, else defaults
    /// 4. EP_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: EP_CONFIG_DIR env var > ./.ep/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.backend.validate()?;
        self.identity.validate()?;
        self.document_store.validate()?;

        if let Some(file) = &self.logging.file
            && (file.contains('/') || file.contains('\\') || file.contains(".."))
        {
            return Err(ConfigError::logging(
                "logging.file must be a bare file name inside logging.dir",
            ));
        }

        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(name) => Ok(Some(Self::config_dir()?.join(&self.logging.dir).join(name))),
            None => Ok(None),
        }
    }

    /// Log configuration summary (NEVER logs the API key).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  backend: {} (health {}ms, requests {}s)",
            self.backend.base_url, self.backend.health_timeout_ms, self.backend.request_timeout_secs
        );
        info!(
            "  identity: {} (api key {})",
            self.identity.auth_base_url,
            if self.identity.api_key.is_some() {
                "set"
            } else {
                "missing"
            }
        );
        info!(
            "  document_store: {} project={} database={}",
            self.document_store.base_url,
            self.document_store.project_id.as_deref().unwrap_or("<unset>"),
            self.document_store.database
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Backend
        Self::apply_env_string("EP_BACKEND_URL", &mut self.backend.base_url);
        Self::apply_env_parse(
            "EP_BACKEND_HEALTH_TIMEOUT_MS",
            &mut self.backend.health_timeout_ms,
        );
        Self::apply_env_parse(
            "EP_BACKEND_REQUEST_TIMEOUT_SECS",
            &mut self.backend.request_timeout_secs,
        );

        // Identity provider
        Self::apply_env_option_string("EP_IDENTITY_API_KEY", &mut self.identity.api_key);
        Self::apply_env_string("EP_IDENTITY_AUTH_URL", &mut self.identity.auth_base_url);
        Self::apply_env_string("EP_IDENTITY_TOKEN_URL", &mut self.identity.token_base_url);

        // Document store
        Self::apply_env_option_string("EP_STORE_PROJECT_ID", &mut self.document_store.project_id);
        Self::apply_env_string("EP_STORE_DATABASE", &mut self.document_store.database);
        Self::apply_env_string("EP_STORE_URL", &mut self.document_store.base_url);

        // Logging
        Self::apply_env_parse("EP_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("EP_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("EP_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored and the previous value kept
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
