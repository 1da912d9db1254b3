//! Client for the fixer.io exchange rate API.
//!
//! Build a [`RatesRequest`], hand it to a [`FixerClient`] and get back a map of
//! currency code to rate.

pub mod cli;
pub mod core;
pub mod providers;

pub use crate::core::{Currency, FixerError, RateResponse, Rates, RatesRequest};
pub use crate::providers::FixerClient;

use crate::cli::rates::RequestOverrides;
use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Rates(RequestOverrides),
    Url(RequestOverrides),
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fixerio starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Rates(overrides) => {
            let request = overrides.apply(config.to_request());
            let client = FixerClient::new()?;
            cli::rates::run(&client, &request).await
        }
        AppCommand::Url(overrides) => {
            println!("{}", overrides.apply(config.to_request()));
            Ok(())
        }
    }
}
