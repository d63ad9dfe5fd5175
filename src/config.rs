//! Runtime configuration for [`OrderSystem`](crate::lifecycle::OrderSystem).
//!
//! Defaults suit the demo and the tests. Each field can be overridden from the
//! environment.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding [`SystemConfig::channel_buffer`].
pub const CHANNEL_BUFFER_ENV_VAR: &str = "ORDER_RECIPE_CHANNEL_BUFFER";

/// Default request channel capacity for each resource actor.
pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Capacity of each actor's request channel. Senders wait while it is full.
    pub channel_buffer: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

impl SystemConfig {
    /// Defaults, overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(CHANNEL_BUFFER_ENV_VAR) {
            config.channel_buffer = match value.trim().parse::<usize>() {
                Ok(buffer) if buffer > 0 => buffer,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: CHANNEL_BUFFER_ENV_VAR,
                        value,
                    })
                }
            };
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_overrides() {
        let config = SystemConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SystemConfig::default());
        assert_eq!(config.channel_buffer, 32);
    }

    #[test]
    fn test_channel_buffer_override() {
        let config = SystemConfig::from_lookup(|var| {
            (var == CHANNEL_BUFFER_ENV_VAR).then(|| " 128 ".to_string())
        })
        .unwrap();
        assert_eq!(config.channel_buffer, 128);
    }

    #[test]
    fn test_rejects_zero_and_garbage() {
        for bad in ["0", "-4", "lots"] {
            let err = SystemConfig::from_lookup(|_| Some(bad.to_string())).unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidValue {
                    var: CHANNEL_BUFFER_ENV_VAR,
                    value: bad.to_string(),
                }
            );
        }
    }
}
