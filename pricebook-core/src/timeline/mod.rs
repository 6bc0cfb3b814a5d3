//! Price-timeline utilities.
//!
//! Modules include:
//! - `group`: bucket a flat record collection into per-key interval runs
//! - `reconcile`: the two-cursor sweep merging a current and a new run
//! - `merge`: entry points joining whole record collections
/// Grouping of flat record collections into sorted per-key interval runs.
pub mod group;
/// Entry points joining current and new record collections.
pub mod merge;
/// The two-cursor reconciliation sweep with inline compaction.
pub mod reconcile;
