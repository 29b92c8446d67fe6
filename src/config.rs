//! Project configuration for orgledger
//!
//! Configuration is stored in `.orgledger/config.toml` and controls the
//! hour-to-day conversion for partial vacations and project metadata.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Project metadata
    #[serde(default)]
    pub project: ProjectConfig,

    /// Vacation accounting configuration
    #[serde(default)]
    pub vacations: VacationConfig,
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectConfig {
    /// Organization or project name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Vacation accounting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationConfig {
    /// Hours that make up one vacation day for partial-day vacations
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: u32,
}

fn default_hours_per_day() -> u32 {
    crate::vacations::HOURS_PER_DAY
}

impl Default for VacationConfig {
    fn default() -> Self {
        Self {
            hours_per_day: default_hours_per_day(),
        }
    }
}

impl Config {
    /// Load configuration from .orgledger/config.toml
    /// Returns default config if file doesn't exist
    pub fn load(ledger_dir: &Path) -> anyhow::Result<Self> {
        let config_path = ledger_dir.join("config.toml");

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to read config: {}", e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config: {}", e))?;

        if config.vacations.hours_per_day == 0 {
            anyhow::bail!("vacations.hours_per_day must be at least 1");
        }

        Ok(config)
    }

    /// Save configuration to .orgledger/config.toml
    pub fn save(&self, ledger_dir: &Path) -> anyhow::Result<()> {
        let config_path = ledger_dir.join("config.toml");

        let content = toml::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

        fs::write(&config_path, content)
            .map_err(|e| anyhow::anyhow!("Failed to write config: {}", e))?;

        Ok(())
    }

    /// Initialize default config file if it doesn't exist
    pub fn init(ledger_dir: &Path) -> anyhow::Result<bool> {
        let config_path = ledger_dir.join("config.toml");

        if config_path.exists() {
            return Ok(false); // Already exists
        }

        let config = Self::default();
        config.save(ledger_dir)?;
        Ok(true) // Created new
    }
}
