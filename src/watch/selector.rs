use tracing::debug;
use tracing::info;

use super::ArmedTarget;
use super::SelectOutcome;
use super::WatchState;
use crate::Error;
use crate::HostApis;
use crate::Result;
use crate::TargetAddress;
use crate::WatchError;

/// Validates `address` against the host and arms the watch on it.
///
/// An unknown address fails with [`WatchError::InvalidTarget`] and leaves
/// whatever was armed before untouched. Otherwise any previous watch is
/// disarmed first, so at most one target is watched at a time.
pub(crate) fn arm<H>(
    state: &mut WatchState,
    host: &H,
    address: TargetAddress,
    keep_alive: bool,
) -> Result<SelectOutcome>
where
    H: HostApis + ?Sized,
{
    if !host.target_exists(&address) {
        debug!("no target at {}, keeping current watch {:?}", address, state.active_target());
        return Err(WatchError::InvalidTarget { address }.into());
    }

    let replaced = state.disarm();
    if let Some(previous) = replaced {
        info!("stopped watching {} to switch to {}", previous, address);
    }

    let canonical_name = host.canonical_name(&address);
    let display_name = Some(host.display_name(&address)).filter(|name| *name != canonical_name);

    state.arm(address, keep_alive);
    info!(
        "watching {} ('{}'), keep_alive: {}",
        address, canonical_name, keep_alive
    );

    Ok(SelectOutcome::Armed {
        target: ArmedTarget {
            address,
            canonical_name,
            display_name,
        },
        keep_alive,
        replaced,
    })
}

/// Disarms the watch, returning the target that was armed.
pub(crate) fn stop(state: &mut WatchState) -> Result<TargetAddress> {
    let address = state.disarm().ok_or(WatchError::NoActiveWatch)?;
    info!("stopped watching {}", address);
    Ok(address)
}

/// Entry point of a check request. `None` toggles: it stops an armed watch,
/// or reports that usage guidance is due when nothing is armed.
pub(crate) fn select<H>(
    state: &mut WatchState,
    host: &H,
    request: Option<(TargetAddress, bool)>,
) -> Result<SelectOutcome>
where
    H: HostApis + ?Sized,
{
    match request {
        Some((address, keep_alive)) => arm(state, host, address, keep_alive),
        None => match stop(state) {
            Ok(address) => Ok(SelectOutcome::Stopped { address }),
            Err(Error::Watch(WatchError::NoActiveWatch)) => Ok(SelectOutcome::ShowedUsage),
            Err(e) => Err(e),
        },
    }
}
