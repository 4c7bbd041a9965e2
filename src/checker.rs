//! The context object wiring host callbacks to the watch.

use tracing::warn;

use crate::help;
use crate::watch;
use crate::watch::ChangeReport;
use crate::watch::SelectOutcome;
use crate::watch::WatchState;
use crate::CheckerConfig;
use crate::Console;
use crate::Error;
use crate::HostApis;
use crate::Result;
use crate::TargetAddress;
use crate::WatchError;

/// A request to start watching a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckRequest {
    pub address: TargetAddress,
    /// `None` falls back to `watch.default_keep_alive`
    pub keep_alive: Option<bool>,
}

impl CheckRequest {
    pub fn new(primary_index: usize) -> Self {
        Self {
            address: TargetAddress::single(primary_index),
            keep_alive: None,
        }
    }

    pub fn slot(
        mut self,
        secondary_index: usize,
    ) -> Self {
        self.address.secondary_index = Some(secondary_index);
        self
    }

    pub fn keep_alive(
        mut self,
        keep_alive: bool,
    ) -> Self {
        self.keep_alive = Some(keep_alive);
        self
    }
}

impl From<TargetAddress> for CheckRequest {
    fn from(address: TargetAddress) -> Self {
        Self {
            address,
            keep_alive: None,
        }
    }
}

/// Owns the host, the console and the single [`WatchState`].
///
/// Both [`check`](Self::check) and [`on_tick`](Self::on_tick) take
/// `&mut self` and run to completion, so they can never interleave. A host
/// that delivers ticks from another thread must put the checker behind a
/// lock.
pub struct ParamChecker<H, C>
where
    H: HostApis,
    C: Console,
{
    host: H,
    console: C,
    state: WatchState,
    config: CheckerConfig,
}

impl<H, C> ParamChecker<H, C>
where
    H: HostApis,
    C: Console,
{
    pub fn new(
        host: H,
        console: C,
        config: CheckerConfig,
    ) -> Self {
        Self {
            state: WatchState::new(config.watch.throttle_period),
            host,
            console,
            config,
        }
    }

    /// Starts watching the requested target, or with `None` stops the
    /// current watch (showing usage guidance when nothing is watched).
    ///
    /// # Errors
    /// - `WatchError::InvalidTarget` when no target exists at the address.
    ///   The explanation has already been printed and the current watch is
    ///   kept.
    /// - `Error::Io` when the console rejects a line.
    pub fn check(
        &mut self,
        request: Option<CheckRequest>,
    ) -> Result<SelectOutcome> {
        let request = request.map(|r| {
            (
                r.address,
                r.keep_alive.unwrap_or(self.config.watch.default_keep_alive),
            )
        });

        match watch::select(&mut self.state, &self.host, request) {
            Ok(outcome) => {
                let lines = match &outcome {
                    SelectOutcome::Armed {
                        target,
                        keep_alive,
                        replaced,
                    } => watch::armed_lines(&self.config.console, target, *keep_alive, *replaced),
                    SelectOutcome::Stopped { .. } => watch::stopped_lines(&self.config.console),
                    SelectOutcome::ShowedUsage => help::usage_lines(&self.config.console.tag),
                };
                self.emit(&lines)?;
                Ok(outcome)
            }
            Err(Error::Watch(WatchError::InvalidTarget { address })) => {
                self.emit(&watch::invalid_target_lines(&self.config.console, &address))?;
                Err(WatchError::InvalidTarget { address }.into())
            }
            Err(e) => Err(e),
        }
    }

    /// Stops the current watch.
    ///
    /// # Errors
    /// `WatchError::NoActiveWatch` when nothing is armed; nothing is printed.
    pub fn stop(&mut self) -> Result<TargetAddress> {
        let address = watch::stop(&mut self.state)?;
        self.emit(&watch::stopped_lines(&self.config.console))?;
        Ok(address)
    }

    /// Host idle hook. Never fails: console errors are logged and dropped.
    pub fn on_tick(&mut self) -> Option<ChangeReport> {
        let report = watch::on_tick(&mut self.state, &self.host)?;
        let lines = watch::change_lines(&self.config.console, &report);
        if let Err(e) = self.emit(&lines) {
            warn!("failed to print change report for {}: {}", report.address, e);
        }
        Some(report)
    }

    pub fn print_load_banner(&mut self) -> Result<()> {
        self.emit(&help::load_banner())
    }

    pub fn state(&self) -> &WatchState {
        &self.state
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    fn emit(
        &mut self,
        lines: &[String],
    ) -> Result<()> {
        for line in lines {
            self.console.write_line(line)?;
        }
        Ok(())
    }
}
