//! ep-cli library
//!
//! Developer harness around the session resolver. Exposes the parsed CLI and
//! the runner so `main.rs` stays a two-liner.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub mod logger;
pub(crate) mod register_commands;
pub(crate) mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use error::{CliError, Result as CliResult};
pub use runner::run;
