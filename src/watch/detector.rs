use tracing::debug;
use tracing::info;
use tracing::trace;

use super::ChangeReport;
use super::ChangedParameter;
use super::WatchState;
use crate::HostApis;
use crate::TargetAddress;

/// Handles one scheduler tick.
///
/// Disarmed: returns at once. Armed: only every `throttle_period`-th tick
/// samples the whole target and diffs it against the snapshot. The first
/// sample after arming only establishes the baseline. Returns a report when
/// at least one parameter changed; without keep-alive the watch is already
/// disarmed when the report is returned.
pub(crate) fn on_tick<H>(
    state: &mut WatchState,
    host: &H,
) -> Option<ChangeReport>
where
    H: HostApis + ?Sized,
{
    let address = state.active_target()?;

    if !state.advance_tick() {
        trace!("tick {} skipped", state.tick_counter());
        return None;
    }

    let changed = sample(state, host, &address);
    debug!(
        "sampled {} at tick {}: {} changed",
        address,
        state.tick_counter(),
        changed.len()
    );
    if changed.is_empty() {
        return None;
    }

    // Names are only looked up for the parameters being reported
    let changes = changed
        .into_iter()
        .map(|index| ChangedParameter {
            index,
            name: host.parameter_name(index, &address),
        })
        .collect();

    let disarmed = !state.keep_alive();
    if disarmed {
        state.disarm();
        info!("change found on {}, watch stopped", address);
    }

    Some(ChangeReport {
        address,
        changes,
        disarmed,
    })
}

/// Reads every parameter, updates the snapshot and returns the indexes whose
/// value differs from the previous sample, ascending.
fn sample<H>(
    state: &mut WatchState,
    host: &H,
    address: &TargetAddress,
) -> Vec<usize>
where
    H: HostApis + ?Sized,
{
    let count = host.parameter_count(address);
    let mut changed = Vec::new();

    for index in 0..count {
        let value = host.parameter_value(index, address);
        if let Some(previous) = state.record(index, value) {
            if value_changed(previous, value) {
                changed.push(index);
            }
        }
    }
    state.truncate(count);

    changed
}

/// Exact comparison, except that NaN is considered equal to NaN.
pub(crate) fn value_changed(
    previous: f64,
    current: f64,
) -> bool {
    if previous.is_nan() && current.is_nan() {
        return false;
    }
    previous != current
}
