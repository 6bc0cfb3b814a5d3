use std::collections::BTreeMap;

use pricebook_types::{PriceKey, PriceRecord};
use serde::{Deserialize, Serialize};

/// One half-open slice of a price timeline for a single [`PriceKey`].
///
/// Lives only for the duration of one merge call; the key it belongs to is
/// carried by the grouping map, not the interval itself. A valid interval
/// has `begin < end` on the epoch-millisecond ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Inclusive start of validity.
    pub begin: i64,
    /// Exclusive end of validity.
    pub end: i64,
    /// Price in minor currency units.
    pub value: u64,
}

impl Interval {
    /// Build an interval from already-resolved boundaries.
    #[must_use]
    pub const fn new(begin: i64, end: i64, value: u64) -> Self {
        Self { begin, end, value }
    }
}

/// Bucket records by their [`PriceKey`] into interval runs sorted by `begin`.
///
/// Non-overlap within one run is the caller's precondition and is not
/// enforced here; the sort is established unconditionally.
#[must_use]
pub fn group_by_key(records: Vec<PriceRecord>) -> BTreeMap<PriceKey, Vec<Interval>> {
    let mut grouped: BTreeMap<PriceKey, Vec<Interval>> = BTreeMap::new();
    for record in records {
        let interval = Interval::new(record.begin, record.end, record.value);
        grouped.entry(record.into_key()).or_default().push(interval);
    }
    for run in grouped.values_mut() {
        run.sort_by_key(|i| i.begin);
    }
    grouped
}
