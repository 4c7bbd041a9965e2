use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Identifies one addressable target on the host.
///
/// A single-level address names e.g. a channel on the channel rack; a
/// two-level address names a slot within a group, e.g. an effect slot on a
/// mixer track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetAddress {
    pub primary_index: usize,
    #[serde(default)]
    pub secondary_index: Option<usize>,
}

impl TargetAddress {
    pub fn new(
        primary_index: usize,
        secondary_index: Option<usize>,
    ) -> Self {
        Self {
            primary_index,
            secondary_index,
        }
    }

    pub fn single(primary_index: usize) -> Self {
        Self::new(primary_index, None)
    }

    pub fn slot(
        primary_index: usize,
        secondary_index: usize,
    ) -> Self {
        Self::new(primary_index, Some(secondary_index))
    }
}

/// Renders as a tuple: `(2,)` or `(1, 3)`.
impl fmt::Display for TargetAddress {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self.secondary_index {
            Some(secondary) => write!(f, "({}, {})", self.primary_index, secondary),
            None => write!(f, "({},)", self.primary_index),
        }
    }
}
