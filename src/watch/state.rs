use std::collections::BTreeMap;

use crate::TargetAddress;

/// The one watch the checker runs.
///
/// Created disarmed. [`arm`](Self::arm) and [`disarm`](Self::disarm) are both
/// idempotent and both discard the snapshot, so a snapshot only ever holds
/// values of the target currently armed.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchState {
    active_target: Option<TargetAddress>,
    keep_alive: bool,
    /// Last observed value per parameter index
    snapshot: BTreeMap<usize, f64>,
    /// Ticks seen since the watch was armed
    tick_counter: u64,
    throttle_period: u64,
}

impl WatchState {
    pub fn new(throttle_period: u64) -> Self {
        Self {
            active_target: None,
            keep_alive: false,
            snapshot: BTreeMap::new(),
            tick_counter: 0,
            throttle_period: throttle_period.max(1),
        }
    }

    pub fn arm(
        &mut self,
        target: TargetAddress,
        keep_alive: bool,
    ) {
        self.active_target = Some(target);
        self.keep_alive = keep_alive;
        self.snapshot.clear();
        self.tick_counter = 0;
    }

    /// Returns the target that was armed, if any.
    pub fn disarm(&mut self) -> Option<TargetAddress> {
        self.snapshot.clear();
        self.tick_counter = 0;
        self.active_target.take()
    }

    pub fn is_armed(&self) -> bool {
        self.active_target.is_some()
    }

    pub fn active_target(&self) -> Option<TargetAddress> {
        self.active_target
    }

    pub fn keep_alive(&self) -> bool {
        self.keep_alive
    }

    pub fn snapshot(&self) -> &BTreeMap<usize, f64> {
        &self.snapshot
    }

    pub fn tick_counter(&self) -> u64 {
        self.tick_counter
    }

    pub fn throttle_period(&self) -> u64 {
        self.throttle_period
    }

    /// Counts one tick. Returns true when this tick is due for a sample.
    pub(crate) fn advance_tick(&mut self) -> bool {
        self.tick_counter = self.tick_counter.wrapping_add(1);
        self.tick_counter % self.throttle_period == 0
    }

    /// Stores `value` for `index`, returning the value it replaces.
    pub(crate) fn record(
        &mut self,
        index: usize,
        value: f64,
    ) -> Option<f64> {
        self.snapshot.insert(index, value)
    }

    /// Drops entries at or above `count` after the target shrank.
    pub(crate) fn truncate(
        &mut self,
        count: usize,
    ) {
        self.snapshot.retain(|index, _| *index < count);
    }
}

impl Default for WatchState {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_THROTTLE_PERIOD)
    }
}
