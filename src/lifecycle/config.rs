//! Runtime configuration for the [`RestaurantSystem`](super::RestaurantSystem).

use thiserror::Error;

pub const CHANNEL_CAPACITY_VAR: &str = "GRUBDASH_CHANNEL_CAPACITY";
pub const SEED_DATA_VAR: &str = "GRUBDASH_SEED_DATA";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidCapacity { var: &'static str, value: String },

    #[error("{var} must be true or false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

/// Settings shared by both resource actors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// Mailbox size of each actor.
    pub channel_capacity: usize,
    /// Load the built-in dishes and orders at start-up.
    pub seed_data: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            seed_data: true,
        }
    }
}

impl SystemConfig {
    /// Reads overrides from the process environment, falling back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from any key lookup. `from_env` is this over `std::env`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = match value.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => {
                    return Err(ConfigError::InvalidCapacity {
                        var: CHANNEL_CAPACITY_VAR,
                        value,
                    })
                }
            };
        }

        if let Some(value) = lookup(SEED_DATA_VAR) {
            config.seed_data = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::InvalidFlag {
                        var: SEED_DATA_VAR,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }

    pub fn without_seed_data(mut self) -> Self {
        self.seed_data = false;
        self
    }
}
