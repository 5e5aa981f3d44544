use std::path::PathBuf;

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use url::Url;

static DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

/// Global configuration at ~/.config/meetdash/config.toml
///
/// Every key can also be set from the environment with a MEETDASH_ prefix,
/// e.g. MEETDASH_SERVER_URL.
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Override for where the undo/redo history is stored. `~` is expanded.
    pub history_file: Option<String>,
}

impl GlobalConfig {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let config: GlobalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(Environment::with_prefix("MEETDASH"))
            .build()?
            .try_deserialize()?;

        Url::parse(&config.server_url)
            .map_err(|e| anyhow::anyhow!("Invalid server_url \"{}\": {}", config.server_url, e))?;

        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("meetdash");

        Ok(config_dir.join("config.toml"))
    }

    /// Where the undo/redo stacks persist between invocations.
    pub fn history_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.history_file {
            return Ok(PathBuf::from(shellexpand::tilde(path).into_owned()));
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?
            .join("meetdash");

        Ok(data_dir.join("history.json"))
    }
}
