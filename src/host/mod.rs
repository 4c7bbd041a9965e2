//! Host collaborator contract.
//!
//! The checker never owns targets or their parameters. Everything it knows
//! about them comes through synchronous [`HostApis`] lookups.

mod address;
mod simulated;
pub use address::*;
pub use simulated::*;

#[cfg(test)]
mod address_test;
#[cfg(test)]
mod simulated_test;

#[cfg(test)]
use mockall::automock;

/// Lookups the checker needs from the surrounding host.
///
/// All calls are assumed fast and always available. Lookups against an
/// address that doesn't resolve are never made by the checker except for
/// `target_exists`.
#[cfg_attr(test, automock)]
pub trait HostApis {
    /// Whether an addressable target exists at `address`
    fn target_exists(
        &self,
        address: &TargetAddress,
    ) -> bool;

    /// Number of tunable parameters the target currently exposes
    fn parameter_count(
        &self,
        address: &TargetAddress,
    ) -> usize;

    /// Current value of parameter `index`
    fn parameter_value(
        &self,
        index: usize,
        address: &TargetAddress,
    ) -> f64;

    /// Display name of parameter `index`
    fn parameter_name(
        &self,
        index: usize,
        address: &TargetAddress,
    ) -> String;

    /// Name the host gives the target itself
    fn canonical_name(
        &self,
        address: &TargetAddress,
    ) -> String;

    /// Name the user assigned to the target; may equal the canonical name
    fn display_name(
        &self,
        address: &TargetAddress,
    ) -> String;
}
