use serde::Deserialize;
use std::path::Path;

use crate::constants::{CONFIG_FILE_PATH, DEFAULT_BASE_URL};

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct Config {
    pub base_url: String,
    /// Pause between accounts, in milliseconds.
    pub account_delay: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            account_delay: 0,
        }
    }
}

impl Config {
    async fn read_from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let cfg_str = tokio::fs::read_to_string(path).await?;
        Ok(toml::from_str(&cfg_str)?)
    }

    /// Reads the config file at `path`, falling back to defaults when it does not exist.
    pub async fn read_or_default(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();

        if !tokio::fs::try_exists(path).await? {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::read_from_file(path)
            .await
            .map_err(|e| eyre::eyre!("Invalid config file {}: {e}", path.display()))
    }

    pub async fn read_default() -> eyre::Result<Self> {
        Self::read_or_default(CONFIG_FILE_PATH).await
    }
}
