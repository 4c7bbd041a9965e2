//! Configuration management for the param checker.
//!
//! Sources are merged with rising priority:
//! 1. Default values (hardcoded)
//! 2. File named by `CONFIG_PATH`
//! 3. Environment variables prefixed with `PARAM_CHECKER__`
//!
//! Validation is deferred to [`CheckerConfig::validate`].

mod console;
mod watch;
pub use console::*;
pub use watch::*;

#[cfg(test)]
mod console_test;
#[cfg(test)]
mod watch_test;

use std::env;

use config::Config;
use config::Environment;
use config::File;
use serde::Deserialize;
use serde::Serialize;

use crate::constants::CONFIG_PATH_ENV;
use crate::constants::ENV_PREFIX;
use crate::constants::ENV_SEPARATOR;
use crate::Result;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct CheckerConfig {
    /// Sampling cadence and arm defaults
    #[serde(default)]
    pub watch: WatchConfig,
    /// Console output format
    #[serde(default)]
    pub console: ConsoleConfig,
}

impl CheckerConfig {
    pub fn new() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Ok(config_path) = env::var(CONFIG_PATH_ENV) {
            builder = builder.add_source(File::with_name(&config_path).required(true));
        }

        builder = builder.add_source(environment());

        let config: Self = builder.build()?.try_deserialize()?;
        Ok(config) // No validation - deferred to validate()
    }

    /// Merges one explicit file over `self`. Environment variables still win.
    pub fn with_override_config(
        &self,
        path: &str,
    ) -> Result<Self> {
        let config: Self = Config::builder()
            .add_source(Config::try_from(self)?)
            .add_source(File::with_name(path))
            .add_source(environment())
            .build()?
            .try_deserialize()?;
        Ok(config) // No validation - deferred to validate()
    }

    pub fn validate(self) -> Result<Self> {
        self.watch.validate()?;
        self.console.validate()?;
        Ok(self)
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .ignore_empty(true)
        .try_parsing(true)
}
