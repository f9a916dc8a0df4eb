//! Configuration file support for Liftlog.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/liftlog/config.toml`.

use crate::plates::{calculate_plates, DEFAULT_BAR_WEIGHT, DEFAULT_LOADING_SIDES, DEFAULT_PLATES};
use crate::{Error, PlateLoadout, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub plates: PlateConfig,

    #[serde(default)]
    pub rep_max: RepMaxConfig,
}

/// Barbell and plate inventory
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlateConfig {
    #[serde(default = "default_bar_weight")]
    pub bar_weight: f64,

    #[serde(default = "default_loading_sides")]
    pub loading_sides: u32,

    #[serde(default = "default_plates")]
    pub available: Vec<f64>,
}

impl Default for PlateConfig {
    fn default() -> Self {
        Self {
            bar_weight: default_bar_weight(),
            loading_sides: default_loading_sides(),
            available: default_plates(),
        }
    }
}

impl PlateConfig {
    /// Reject inventories the plate loader cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(self.bar_weight.is_finite() && self.bar_weight > 0.0) {
            return Err(Error::Config(format!(
                "bar_weight must be positive, got {}",
                self.bar_weight
            )));
        }
        if self.loading_sides == 0 {
            return Err(Error::Config("loading_sides must be at least 1".into()));
        }
        if let Some(bad) = self
            .available
            .iter()
            .find(|plate| !(plate.is_finite() && **plate > 0.0))
        {
            return Err(Error::Config(format!(
                "plate weights must be positive, got {}",
                bad
            )));
        }
        Ok(())
    }

    /// Plates needed to reach `target_weight` with this inventory
    pub fn loadout_for(&self, target_weight: f64) -> PlateLoadout {
        calculate_plates(
            target_weight,
            &self.available,
            self.bar_weight,
            self.loading_sides,
        )
    }
}

/// Rep-max display preferences
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RepMaxConfig {
    /// Round estimates to the nearest loadable 2.5 increment
    #[serde(default = "default_round_estimates")]
    pub round_estimates: bool,
}

impl Default for RepMaxConfig {
    fn default() -> Self {
        Self {
            round_estimates: default_round_estimates(),
        }
    }
}

// Default value functions
fn default_bar_weight() -> f64 {
    DEFAULT_BAR_WEIGHT
}

fn default_loading_sides() -> u32 {
    DEFAULT_LOADING_SIDES
}

fn default_plates() -> Vec<f64> {
    DEFAULT_PLATES.to_vec()
}

fn default_round_estimates() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from(".config"));
        base.join("liftlog").join("config.toml")
    }

    /// Reject settings the engines cannot work with
    pub fn validate(&self) -> Result<()> {
        self.plates.validate()
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
