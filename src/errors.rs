//! Param Checker Error Hierarchy
//!
//! Watch outcomes the user must see are kept apart from infrastructure
//! failures (configuration, console I/O, simulated host scripting).

use config::ConfigError;

use crate::TargetAddress;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// User-visible watch outcomes (bad address, nothing to stop)
    #[error(transparent)]
    Watch(#[from] WatchError),

    /// Configuration loading or validation failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failures reported by the in-memory host
    #[error(transparent)]
    Host(#[from] HostError),

    /// Console output or input stream failures
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WatchError {
    /// No target exists at the requested address
    #[error("Can't check for parameter changes at index `{address}`")]
    InvalidTarget { address: TargetAddress },

    /// Stop was requested while nothing is being watched
    #[error("No active watch to stop")]
    NoActiveWatch,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HostError {
    #[error("No target at index `{0}`")]
    UnknownTarget(TargetAddress),

    #[error("Parameter {index} out of range for `{address}` ({count} parameters)")]
    ParameterOutOfRange {
        address: TargetAddress,
        index: usize,
        count: usize,
    },

    #[error("Duplicate target at index `{0}`")]
    DuplicateTarget(TargetAddress),
}
