use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

use super::currency::{Currency, EUR};
use super::request::{DEFAULT_HOST, RatesRequest};

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_secure() -> bool {
    true
}

fn default_base() -> Currency {
    EUR
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_secure")]
    pub secure: bool,
    #[serde(default = "default_base")]
    pub base: Currency,
    #[serde(default)]
    pub symbols: Vec<Currency>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: default_host(),
            secure: default_secure(),
            base: default_base(),
            symbols: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "fixer", "fixerio")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Builds the request the configured defaults describe.
    pub fn to_request(&self) -> RatesRequest {
        RatesRequest::for_host(self.host.as_str())
            .secure(self.secure)
            .base(self.base.clone())
            .symbols(self.symbols.iter().cloned())
    }
}
