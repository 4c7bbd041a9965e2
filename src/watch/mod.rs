//! Change detection over a single watched target.
//!
//! The selector arms and disarms the watch; the detector samples the armed
//! target on throttled ticks and diffs it against the last snapshot. Both
//! operate on one [`WatchState`] passed in by the owner.

mod detector;
mod event;
mod report;
mod selector;
mod state;

pub(crate) use detector::*;
pub use event::*;
pub(crate) use report::*;
pub(crate) use selector::*;
pub use state::*;
