use std::collections::BTreeMap;

use pricebook_types::{MergeOptions, PriceKey, PriceRecord, PricebookError, ValidationMode};

use super::group::{Interval, group_by_key};
use super::reconcile::reconcile;

/// Reattach the grouping key to each reconciled interval.
fn rebuild(key: &PriceKey, intervals: Vec<Interval>) -> Vec<PriceRecord> {
    intervals
        .into_iter()
        .map(|i| {
            PriceRecord::new(
                key.product_code.clone(),
                key.price_number,
                key.department,
                i.begin,
                i.end,
                i.value,
            )
        })
        .collect()
}

/// Merge a batch of newly supplied price records into the current ones.
///
/// Records are grouped by [`PriceKey`]; each key's two interval runs are
/// reconciled with [`reconcile`], then keys present in only one input pass
/// through untouched. An empty `current` returns `new` verbatim; this fast
/// path (like the merge as a whole) trusts `new` to be well-formed per key.
///
/// Output is deterministic: current's keys in ascending key order, then
/// keys present only in `new` in ascending key order, each group ascending
/// by `begin`. Callers should not rely on cross-group order; it is an
/// implementation behavior, not an API guarantee.
///
/// Preconditions (not checked here, see [`merge_prices_with`]): every record
/// has `begin < end`, and within each input collection records sharing a key
/// do not overlap in validity. Malformed input yields unspecified output,
/// never a panic or a hang.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "pricebook::timeline::merge_prices",
        skip(current, new),
        fields(current_records = current.len(), new_records = new.len()),
    )
)]
#[must_use]
pub fn merge_prices(current: Vec<PriceRecord>, new: Vec<PriceRecord>) -> Vec<PriceRecord> {
    if current.is_empty() {
        return new;
    }

    let current_groups = group_by_key(current);
    let mut new_groups = group_by_key(new);
    let mut merged = Vec::new();

    for (key, current_run) in current_groups {
        match new_groups.remove(&key) {
            Some(new_run) => merged.extend(rebuild(&key, reconcile(current_run, new_run))),
            None => merged.extend(rebuild(&key, current_run)),
        }
    }
    for (key, new_run) in new_groups {
        merged.extend(rebuild(&key, new_run));
    }

    merged
}

/// [`merge_prices`] with configurable input validation.
///
/// Under [`ValidationMode::Strict`] both collections are checked first:
/// every record must satisfy `begin < end`, and same-key records within one
/// collection must not overlap. Under the default
/// [`ValidationMode::Trusting`] this behaves exactly like [`merge_prices`].
///
/// # Errors
/// Returns `Err(PricebookError::InvalidInput)` describing the first
/// violation found in strict mode.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "pricebook::timeline::merge_prices_with",
        skip(current, new),
        fields(
            current_records = current.len(),
            new_records = new.len(),
            validation = ?opts.validation,
        ),
    )
)]
pub fn merge_prices_with(
    current: Vec<PriceRecord>,
    new: Vec<PriceRecord>,
    opts: &MergeOptions,
) -> Result<Vec<PriceRecord>, PricebookError> {
    if opts.validation == ValidationMode::Strict {
        validate_records(&current, "current")?;
        validate_records(&new, "new")?;
    }
    Ok(merge_prices(current, new))
}

/// Check the strict-mode preconditions for one input collection.
fn validate_records(records: &[PriceRecord], side: &str) -> Result<(), PricebookError> {
    let mut periods: BTreeMap<PriceKey, Vec<(i64, i64)>> = BTreeMap::new();
    for record in records {
        if record.begin >= record.end {
            return Err(PricebookError::invalid_input(format!(
                "{side} record for {} has empty validity [{}, {})",
                record.key(),
                record.begin,
                record.end
            )));
        }
        periods
            .entry(record.key())
            .or_default()
            .push((record.begin, record.end));
    }
    for (key, mut run) in periods {
        run.sort_unstable();
        for pair in run.windows(2) {
            if pair[0].1 > pair[1].0 {
                return Err(PricebookError::invalid_input(format!(
                    "{side} records for {key} overlap: [{}, {}) and [{}, {})",
                    pair[0].0, pair[0].1, pair[1].0, pair[1].1
                )));
            }
        }
    }
    Ok(())
}
