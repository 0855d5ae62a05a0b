//! Configuration management for notefleet
//!
//! Config stored at: ~/.config/notefleet/config.json

use notefleet_store::{DEFAULT_FIRST_NOTE_ID, DEFAULT_FIRST_ORDER_ID};
use notefleet_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Number of vehicles in the default fleet
    #[serde(default = "default_fleet_size")]
    pub fleet_size: u32,

    /// TOML fleet definition, used instead of the numbered fleet when set
    #[serde(default)]
    pub fleet_file: Option<PathBuf>,

    /// First id issued by the order store
    #[serde(default = "default_first_order_id")]
    pub first_order_id: u64,

    /// First id issued by the notebook
    #[serde(default = "default_first_note_id")]
    pub first_note_id: u64,
}

fn default_fleet_size() -> u32 {
    3
}

fn default_first_order_id() -> u64 {
    DEFAULT_FIRST_ORDER_ID
}

fn default_first_note_id() -> u64 {
    DEFAULT_FIRST_NOTE_ID
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            fleet_size: default_fleet_size(),
            fleet_file: None,
            first_order_id: default_first_order_id(),
            first_note_id: default_first_note_id(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("notefleet");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from an explicit path, or create default
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Notefleet Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Fleet size:     {}", self.fleet_size)?;
        writeln!(
            f,
            "Fleet file:     {}",
            self.fleet_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string())
        )?;
        writeln!(f, "First order id: {}", self.first_order_id)?;
        writeln!(f, "First note id:  {}", self.first_note_id)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
