//! Price records and their grouping identity.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Composite identity of one independent price timeline.
///
/// Two records belong to the same timeline exactly when all three fields are
/// equal. The merge core never interprets the fields beyond equality and
/// ordering; ordering exists so groupings can live in a `BTreeMap`, which
/// keeps cross-group output order deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PriceKey {
    /// Product identifier as carried by the upstream assortment system.
    pub product_code: String,
    /// Price slot number; one product can carry several concurrent prices.
    pub price_number: u32,
    /// Store department the price applies to.
    pub department: u32,
}

impl fmt::Display for PriceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (price {}, dept {})",
            self.product_code, self.price_number, self.department
        )
    }
}

/// A time-bounded price for one product, price slot, and department.
///
/// The validity period is half-open `[begin, end)` on the epoch-millisecond
/// ordinal, so `end == begin` of a neighbouring record means "touching, not
/// overlapping". `value` is the price in minor currency units (e.g. cents).
///
/// A well-formed record has `begin < end`; within one collection handed to
/// the merge, records sharing a [`PriceKey`] must not overlap in validity.
/// The merge core trusts this by default, see
/// [`ValidationMode`](crate::ValidationMode) for the checked alternative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Product identifier.
    pub product_code: String,
    /// Price slot number.
    pub price_number: u32,
    /// Store department number.
    pub department: u32,
    /// Inclusive start of validity, epoch milliseconds.
    pub begin: i64,
    /// Exclusive end of validity, epoch milliseconds.
    pub end: i64,
    /// Price in minor currency units.
    pub value: u64,
}

impl PriceRecord {
    /// Build a record from an already-resolved validity period.
    pub fn new(
        product_code: impl Into<String>,
        price_number: u32,
        department: u32,
        begin: i64,
        end: i64,
        value: u64,
    ) -> Self {
        Self {
            product_code: product_code.into(),
            price_number,
            department,
            begin,
            end,
            value,
        }
    }

    /// Build a record from UTC timestamps, resolving them to the
    /// epoch-millisecond ordinal the merge core works on.
    pub fn with_validity_utc(
        product_code: impl Into<String>,
        price_number: u32,
        department: u32,
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
        value: u64,
    ) -> Self {
        Self::new(
            product_code,
            price_number,
            department,
            begin.timestamp_millis(),
            end.timestamp_millis(),
            value,
        )
    }

    /// The grouping identity of this record.
    #[must_use]
    pub fn key(&self) -> PriceKey {
        PriceKey {
            product_code: self.product_code.clone(),
            price_number: self.price_number,
            department: self.department,
        }
    }

    /// Consume the record, keeping only its grouping identity.
    #[must_use]
    pub fn into_key(self) -> PriceKey {
        PriceKey {
            product_code: self.product_code,
            price_number: self.price_number,
            department: self.department,
        }
    }

    /// Start of validity as a UTC timestamp, `None` if out of chrono's range.
    #[must_use]
    pub fn begin_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.begin)
    }

    /// End of validity as a UTC timestamp, `None` if out of chrono's range.
    #[must_use]
    pub fn end_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.end)
    }
}
