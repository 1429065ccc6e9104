//! Roller configuration with documented defaults
//!
//! Loaded from an optional TOML file. Every field has a default so an
//! empty file (or no file at all) yields a usable configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::error::{DiceError, Result};

/// Configuration for the roller and the probability engine
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RollerConfig {
    /// Seed for single rolls
    ///
    /// When set, rolls come from a ChaCha8 stream seeded with this value
    /// and are reproducible across runs. When unset, the thread RNG is used.
    pub seed: Option<u64>,

    /// Upper bound on the number of face combinations the enumerator
    /// will walk
    ///
    /// The enumerator is exact and exponential in pool size. A pool of
    /// eight twelve-sided dice is already ~430 million combinations.
    /// Pools above this bound are refused instead of approximated.
    pub max_combinations: u64,

    /// Additional-effects catalog (TOML)
    pub effects_path: Option<PathBuf>,

    /// Default tracing filter directive, overridden by RUST_LOG
    pub log_filter: String,
}

impl Default for RollerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_combinations: 100_000_000,
            effects_path: None,
            log_filter: "genesys_dice=info".into(),
        }
    }
}

impl RollerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: RollerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_combinations == 0 {
            return Err(DiceError::InvalidConfig(
                "max_combinations must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
