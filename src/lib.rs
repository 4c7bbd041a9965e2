//! Discovers the index of a target's tunable parameters.
//!
//! Arm a watch on a target with [`ParamChecker::check`], then feed the host's
//! idle notifications into [`ParamChecker::on_tick`]. Every
//! `throttle_period`-th tick the whole target is sampled and the indexes of
//! parameters that changed since the previous sample are reported on the
//! console.

mod checker;
mod config;
mod console;
mod constants;
mod errors;
pub mod help;
mod host;
pub mod watch;

pub use checker::*;
pub use config::*;
pub use console::*;
pub use errors::*;
pub use host::*;
pub use watch::ArmedTarget;
pub use watch::ChangeReport;
pub use watch::ChangedParameter;
pub use watch::SelectOutcome;
pub use watch::WatchState;
