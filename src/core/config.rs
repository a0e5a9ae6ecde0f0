//! Run configuration loaded from TOML
//!
//! Describes one tournament run for the headless driver: which seed and
//! arena to use, whether gamemaker triggers are enabled, and where to find
//! an optional replacement catalog and the hall-of-fame record file.
//! Tuning probabilities live in `simulation::constants` and are not
//! configurable.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{ArenaError, Result};

/// Configuration for a single tournament run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Seed string; a random seed is drawn by the driver when absent
    #[serde(default)]
    pub seed: Option<String>,

    /// Arena id from the catalog
    #[serde(default = "default_arena")]
    pub arena: String,

    /// Enables manual gamemaker triggers
    #[serde(default)]
    pub gamemaker_mode: bool,

    /// Day on which the driver calls a feast (requires gamemaker mode)
    #[serde(default)]
    pub feast_day: Option<u32>,

    /// TOML catalog replacing the standard arenas/items/traits
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// JSON file collecting hall-of-fame records
    #[serde(default)]
    pub hall_of_fame: Option<PathBuf>,

    /// Upper bound on day/night ticks before the driver gives up
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u32,
}

fn default_arena() -> String {
    "clockwork".to_string()
}

fn default_max_ticks() -> u32 {
    500
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            arena: default_arena(),
            gamemaker_mode: false,
            feast_day: None,
            catalog: None,
            hall_of_fame: None,
            max_ticks: default_max_ticks(),
        }
    }
}

impl RunConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: RunConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a run configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.arena.trim().is_empty() {
            return Err(ArenaError::InvalidConfig("arena id must not be empty".into()));
        }

        if self.max_ticks == 0 {
            return Err(ArenaError::InvalidConfig("max_ticks must be positive".into()));
        }

        if let Some(seed) = &self.seed {
            if seed.is_empty() {
                return Err(ArenaError::InvalidConfig("seed must not be empty".into()));
            }
        }

        if self.feast_day == Some(0) {
            return Err(ArenaError::InvalidConfig(
                "feast_day must be 1 or later (day 0 precedes the games)".into(),
            ));
        }

        Ok(())
    }
}
