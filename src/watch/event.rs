use crate::TargetAddress;

/// A target that was just armed, named the way the host names it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmedTarget {
    pub address: TargetAddress,
    pub canonical_name: String,
    /// User-assigned name, `None` when it equals the canonical name
    pub display_name: Option<String>,
}

/// Result of a successful check request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    Armed {
        target: ArmedTarget,
        keep_alive: bool,
        /// Target that was watched before and got implicitly stopped
        replaced: Option<TargetAddress>,
    },
    Stopped {
        address: TargetAddress,
    },
    /// Stop was requested with nothing armed; usage guidance was shown.
    ShowedUsage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedParameter {
    pub index: usize,
    pub name: String,
}

/// Parameters found changed on one sampling tick, ascending by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeReport {
    pub address: TargetAddress,
    pub changes: Vec<ChangedParameter>,
    /// Whether the watch stopped itself after this report
    pub disarmed: bool,
}

impl ChangeReport {
    pub fn indexes(&self) -> Vec<usize> {
        self.changes.iter().map(|c| c.index).collect()
    }
}
