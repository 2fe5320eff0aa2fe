//! portal - education portal session harness
//!
//! Drives the same login / registration flows the portal UI uses, against a
//! real backend, identity provider and document store.
//!
//! # Examples
//!
//! ```bash
//! # Is the backend up?
//! portal probe
//!
//! # Log in through the student portal
//! portal login --email a@x.com --password secret1 --role student
//!
//! # Register a company account
//! portal register --email hr@initech.com --password secret1 \
//!     company --company-name Initech --contact-person "Bill Lumbergh"
//! ```

use ep_cli::Cli;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    ep_cli::run(cli).await
}
