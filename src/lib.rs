pub mod cli;
pub mod core;
pub mod store;

pub use cli::AppCommand;

use crate::core::config::{AppConfig, validate_caller};
use crate::store::{KeyValueStore, local::LocalBackend};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Runtime options that override the configuration file.
#[derive(Debug, Default, Clone)]
pub struct RunOptions<'a> {
    pub config_path: Option<&'a str>,
    pub caller: Option<&'a str>,
}

pub fn load_config(options: &RunOptions<'_>) -> Result<AppConfig> {
    let mut config = match options.config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    if let Some(caller) = options.caller {
        config.caller = validate_caller(caller)?;
    }
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

pub fn open_backend(config: &AppConfig) -> Result<LocalBackend> {
    let data_dir = config.data_dir()?;
    let store = Arc::new(KeyValueStore::open(&data_dir)?);
    Ok(LocalBackend::new(
        store,
        &config.caller,
        config.dashboard.recent_transfers,
    ))
}

pub async fn run_command(command: AppCommand, options: RunOptions<'_>) -> Result<()> {
    info!("bankdesk starting...");
    let config = load_config(&options)?;
    let currency = config.currency.as_str();

    match &command {
        AppCommand::Interest(args) => cli::interest::run(args, &config),
        AppCommand::Dashboard => cli::dashboard::run(&open_backend(&config)?, currency).await,
        AppCommand::Profile(cmd) => cli::profile::run(cmd, &open_backend(&config)?).await,
        AppCommand::Transfer(cmd) => {
            cli::transfer::run(cmd, &open_backend(&config)?, currency).await
        }
        AppCommand::Card(cmd) => cli::card::run(cmd, &open_backend(&config)?).await,
        AppCommand::Loan(cmd) => cli::loan::run(cmd, &open_backend(&config)?, currency).await,
        AppCommand::Insurance(cmd) => {
            cli::insurance::run(cmd, &open_backend(&config)?, currency).await
        }
        AppCommand::Emi(cmd) => cli::emi::run(cmd, &open_backend(&config)?, &config).await,
        AppCommand::Role(cmd) => cli::profile::run_role(cmd, &open_backend(&config)?).await,
    }
}
