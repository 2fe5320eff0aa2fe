use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "Education portal session harness")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Backend URL (overrides backend.base_url and EP_BACKEND_URL)
    #[arg(long, global = true)]
    pub(crate) backend: Option<String>,

    /// Log at debug level regardless of configuration
    #[arg(long, short, global = true)]
    pub(crate) verbose: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
