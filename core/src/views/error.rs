//! Error types for view assembly

use thiserror::Error;

/// User-correctable selection problems. Reported inline next to the
/// affected control; the rest of the dashboard still renders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("exactly three statistics are required for the 3D view, got {selected}")]
    DimensionCount { selected: usize },

    #[error("unknown statistic '{name}'")]
    UnknownStat { name: String },

    #[error("unknown playoff tier {value}")]
    UnknownTier { value: i64 },
}

/// Data-integrity fault: a normalized franchise name has no entry in the
/// team lookup table. Not a user error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("franchise '{name}' is missing from the team lookup table")]
    UnknownFranchise { name: String },
}

/// Per-view failure, so one broken view never tears down the others.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}
