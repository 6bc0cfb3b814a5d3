//! pricebook-core
//!
//! Deterministic reconciliation of two price timelines.
//!
//! - `timeline`: grouping, reconciliation, and rebuilding of per-key price
//!   timelines.
//!
//! The entry point is [`merge_prices`]: given the currently effective price
//! records and a newly supplied batch, it produces one non-overlapping
//! timeline per product/price-slot/department. Where validity periods
//! conflict the new record's value wins; where both sides agree on the value
//! their periods are unioned.
//!
//! The crate is purely synchronous. One merge call is a closed-form
//! computation over two in-memory collections, with no I/O, no timers, and
//! no shared state. Distinct keys are reconciled independently, so callers
//! are free to partition work across keys and threads themselves.
#![warn(missing_docs)]

pub mod timeline;

pub use pricebook_types::{MergeOptions, PriceKey, PriceRecord, PricebookError, ValidationMode};
pub use timeline::group::{Interval, group_by_key};
pub use timeline::merge::{merge_prices, merge_prices_with};
pub use timeline::reconcile::reconcile;
