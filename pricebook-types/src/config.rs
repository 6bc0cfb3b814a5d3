//! Configuration types steering a merge call.

use serde::{Deserialize, Serialize};

/// How strictly merge inputs are checked before reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ValidationMode {
    /// Trust the caller. Malformed input (empty validity periods, per-key
    /// overlaps within one collection) yields unspecified output, though
    /// never a panic or a hang.
    #[default]
    Trusting,
    /// Reject records with `begin >= end` and per-key overlapping periods
    /// within either input collection before reconciling anything.
    Strict,
}

/// Options for a single merge call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MergeOptions {
    /// Input validation policy applied before reconciliation.
    pub validation: ValidationMode,
}
