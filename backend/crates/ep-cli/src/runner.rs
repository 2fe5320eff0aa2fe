use crate::cli::Cli;
use crate::commands::Commands;
use crate::{CliError, CliResult, logger};

use ep_config::{Config, LogLevel};
use ep_core::RegistrationRequest;
use ep_session::{
    BackendClient, FirebaseAuthClient, FirestoreClient, ProfileBackend, SessionResolver,
};

use std::process::ExitCode;
use std::sync::Arc;

use log::{LevelFilter, debug, error};
use serde_json::{Value, json};

/// Load config, wire the adapters, run one command and print its JSON result.
pub async fn run(cli: Cli) -> ExitCode {
    let pretty = cli.pretty;

    match execute(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> CliResult<Value> {
    let config = load_config(&cli)?;

    // Probing only needs the backend, not identity or store credentials.
    if matches!(cli.command, Commands::Probe) {
        return probe(&config).await;
    }

    let resolver = build_resolver(&config)?;

    let reachable = resolver.probe_backend().await;
    debug!("Backend reachable: {reachable}");

    let value = match cli.command {
        Commands::Probe => probe_report(&config, reachable),

        Commands::Login {
            email,
            password,
            role,
        } => {
            let profile = resolver.login(&email, &password, role).await?;
            json!({
                "dashboard": profile.role().dashboard_path(),
                "user": profile,
            })
        }

        Commands::Register {
            email,
            password,
            role,
        } => {
            let request = RegistrationRequest::new(email, password, role.into_profile());
            let receipt = resolver.register(request).await?;
            json!({
                "receipt": receipt,
                "message": resolver.session().snapshot().message,
            })
        }

        Commands::ResetPassword { email } => {
            resolver.send_password_reset(&email).await?;
            json!({ "sent": true, "email": email })
        }

        Commands::Institutions => {
            let institutions = resolver.list_institutions().await?;
            serde_json::to_value(institutions)?
        }
    };

    Ok(value)
}

pub(crate) async fn probe(config: &Config) -> CliResult<Value> {
    let backend = BackendClient::from_config(&config.backend)?;
    let reachable = match backend.health().await {
        Ok(()) => true,
        Err(e) => {
            debug!("Backend health check failed: {e}");
            false
        }
    };

    Ok(probe_report(config, reachable))
}

fn probe_report(config: &Config, reachable: bool) -> Value {
    json!({
        "backendUrl": config.backend.base_url,
        "backendReachable": reachable,
    })
}

fn load_config(cli: &Cli) -> CliResult<Config> {
    let mut config = Config::load()?;

    if let Some(url) = &cli.backend {
        config.backend.base_url = url.clone();
    }
    if cli.verbose {
        config.logging.level = LogLevel(LevelFilter::Debug);
    }

    config.validate()?;

    let log_file = config.log_file_path()?;
    if let Some(parent) = log_file.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            CliError::logger(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;
    config.log_summary();

    Ok(config)
}

fn build_resolver(config: &Config) -> CliResult<Arc<SessionResolver>> {
    let request_timeout = config.backend.request_timeout();

    let backend = BackendClient::from_config(&config.backend)?;
    let identity = FirebaseAuthClient::from_config(&config.identity, request_timeout)?;
    let store = FirestoreClient::from_config(&config.document_store, request_timeout)?;

    Ok(Arc::new(SessionResolver::new(
        Arc::new(identity),
        Arc::new(store),
        Arc::new(backend),
    )))
}
