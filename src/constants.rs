// -
// Watch

/// Ticks between two samples of the watched target
pub(crate) const DEFAULT_THROTTLE_PERIOD: u64 = 10;

// -
// Console

/// Tag line printed before every message block
pub(crate) const DEFAULT_CONSOLE_TAG: &str = "[FL Param Checker]";

/// Width of the right-aligned index column in change reports
pub(crate) const DEFAULT_INDEX_WIDTH: usize = 4;
pub(crate) const MAX_INDEX_WIDTH: usize = 10;

// -
// Environment

/// Prefix of environment variables overriding configuration
/// (e.g. `PARAM_CHECKER__WATCH__THROTTLE_PERIOD=5`)
pub(crate) const ENV_PREFIX: &str = "PARAM_CHECKER";
pub(crate) const ENV_SEPARATOR: &str = "__";
pub(crate) const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
