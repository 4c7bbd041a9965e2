use config::ConfigError;
use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEFAULT_CONSOLE_TAG;
use crate::constants::DEFAULT_INDEX_WIDTH;
use crate::constants::MAX_INDEX_WIDTH;
use crate::Error;
use crate::Result;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConsoleConfig {
    /// Bracketed tag line opening every message block
    #[serde(default = "default_tag")]
    pub tag: String,

    /// Width of the right-aligned index column in change reports
    #[serde(default = "default_index_width")]
    pub index_width: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            tag: default_tag(),
            index_width: default_index_width(),
        }
    }
}

impl ConsoleConfig {
    /// Validates console configuration
    /// # Errors
    /// Returns `Error::Config` when:
    /// - the tag is blank
    /// - the index width is outside `1..=10`
    pub fn validate(&self) -> Result<()> {
        if self.tag.trim().is_empty() {
            return Err(Error::Config(ConfigError::Message("console tag cannot be empty".into())));
        }

        if self.index_width == 0 || self.index_width > MAX_INDEX_WIDTH {
            return Err(Error::Config(ConfigError::Message(format!(
                "index_width {} must be within 1..={}",
                self.index_width, MAX_INDEX_WIDTH
            ))));
        }

        Ok(())
    }
}

fn default_tag() -> String {
    DEFAULT_CONSOLE_TAG.to_string()
}

fn default_index_width() -> usize {
    DEFAULT_INDEX_WIDTH
}
