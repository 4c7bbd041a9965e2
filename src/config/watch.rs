use config::ConfigError;
use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEFAULT_THROTTLE_PERIOD;
use crate::Error;
use crate::Result;

/// Sampling cadence of the change detector
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WatchConfig {
    /// Number of ticks between two samples of the watched target.
    /// Every sample enumerates all parameters of the target.
    #[serde(default = "default_throttle_period")]
    pub throttle_period: u64,

    /// Keep-alive flag used when a check request doesn't specify one
    #[serde(default = "default_keep_alive")]
    pub default_keep_alive: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            throttle_period: default_throttle_period(),
            default_keep_alive: default_keep_alive(),
        }
    }
}

impl WatchConfig {
    /// Validates watch configuration
    /// # Errors
    /// Returns `Error::Config` when `throttle_period` is 0
    pub fn validate(&self) -> Result<()> {
        if self.throttle_period == 0 {
            return Err(Error::Config(ConfigError::Message(
                "throttle_period must be greater than 0".into(),
            )));
        }
        Ok(())
    }
}

fn default_throttle_period() -> u64 {
    DEFAULT_THROTTLE_PERIOD
}

fn default_keep_alive() -> bool {
    false
}
