use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::calendar::SuitabilityThresholds;

const CONFIG_FILE: &str = "pickleball.toml";

/// Persistent defaults: suitability thresholds plus an optional home
/// location used when the command line gives none
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub thresholds: SuitabilityThresholds,
}

impl Config {
    /// Load from pickleball.toml, writing a default file on first run
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            let data = std::fs::read_to_string(path).context("Failed to read config")?;
            toml::from_str(&data).context("Failed to parse config")
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let data = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(CONFIG_FILE, data).context("Failed to write config")?;
        Ok(())
    }
}
