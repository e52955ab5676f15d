//! Configuration for the zoo and the per-animal drivers.
//!
//! Loaded from `menagerie-config.yaml` at startup; every field has a
//! default so a missing file or a partial file still produces a
//! runnable zoo.

use std::path::Path;

use menagerie_types::Enclosure;
use serde::{Deserialize, Serialize};

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {message}")]
    Io {
        /// Description of the I/O failure.
        message: String,
    },

    /// The configuration file could not be parsed.
    #[error("failed to parse config YAML: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
    },

    /// A configured value is unusable.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

/// Timing configuration for the two per-animal drivers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Period of the motion driver in milliseconds (default: 1000).
    #[serde(default = "default_motion_period_ms")]
    pub motion_period_ms: u64,

    /// Lower bound of the per-animal hunger decay period in seconds
    /// (default: 10). The period is drawn once per animal, uniformly
    /// from `[min, max]`, and reused every cycle.
    #[serde(default = "default_hunger_period_min_secs")]
    pub hunger_period_min_secs: u64,

    /// Upper bound of the per-animal hunger decay period in seconds
    /// (default: 20).
    #[serde(default = "default_hunger_period_max_secs")]
    pub hunger_period_max_secs: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            motion_period_ms: default_motion_period_ms(),
            hunger_period_min_secs: default_hunger_period_min_secs(),
            hunger_period_max_secs: default_hunger_period_max_secs(),
        }
    }
}

const fn default_motion_period_ms() -> u64 {
    1000
}

const fn default_hunger_period_min_secs() -> u64 {
    10
}

const fn default_hunger_period_max_secs() -> u64 {
    20
}

/// Top-level zoo configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZooConfig {
    /// Display name of the zoo (default: "Como Zoo").
    #[serde(default = "default_zoo_name")]
    pub name: String,

    /// Master random seed; determines the roster's placement and every
    /// animal's private generator seed (default: 42).
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Enclosure bounds shared by all cages (default: 800 x 400).
    #[serde(default)]
    pub enclosure: Enclosure,

    /// Driver timing.
    #[serde(default)]
    pub drivers: DriverConfig,
}

impl Default for ZooConfig {
    fn default() -> Self {
        Self {
            name: default_zoo_name(),
            seed: default_seed(),
            enclosure: Enclosure::default(),
            drivers: DriverConfig::default(),
        }
    }
}

fn default_zoo_name() -> String {
    String::from("Como Zoo")
}

const fn default_seed() -> u64 {
    42
}

impl ZooConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or
    /// if the hunger period range is inverted.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            message: format!("{e}"),
        })?;
        let config: Self = serde_yml::from_str(&contents).map_err(|e| ConfigError::Parse {
            message: format!("{e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for unusable values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the hunger period range is
    /// inverted or the motion period is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.drivers.motion_period_ms == 0 {
            return Err(ConfigError::Invalid {
                reason: "motion_period_ms must be at least 1".to_owned(),
            });
        }
        if self.drivers.hunger_period_min_secs > self.drivers.hunger_period_max_secs {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "hunger period range is inverted ({} > {})",
                    self.drivers.hunger_period_min_secs, self.drivers.hunger_period_max_secs
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = ZooConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.name, "Como Zoo");
        assert_eq!(config.drivers.motion_period_ms, 1000);
        assert_eq!(config.drivers.hunger_period_min_secs, 10);
        assert_eq!(config.drivers.hunger_period_max_secs, 20);
        assert_eq!(config.enclosure.width, 800);
        assert_eq!(config.enclosure.height, 400);
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let config: ZooConfig = serde_yml::from_str("name: Tiny Zoo\n").unwrap();
        assert_eq!(config.name, "Tiny Zoo");
        assert_eq!(config.drivers.motion_period_ms, 1000);
    }

    #[test]
    fn inverted_hunger_range_is_rejected() {
        let mut config = ZooConfig::default();
        config.drivers.hunger_period_min_secs = 30;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn zero_motion_period_is_rejected() {
        let mut config = ZooConfig::default();
        config.drivers.motion_period_ms = 0;
        assert!(config.validate().is_err());
    }
}
