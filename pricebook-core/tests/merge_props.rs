use std::collections::{BTreeMap, BTreeSet};

use pricebook_core::{Interval, PriceKey, PriceRecord, merge_prices, reconcile};
use proptest::prelude::*;

/// A well-formed run: sorted by begin, pairwise non-overlapping, every
/// interval non-empty. Gaps of zero produce touching neighbours, which are
/// legal input (only output is guaranteed compacted).
fn arb_run() -> impl Strategy<Value = Vec<Interval>> {
    proptest::collection::vec((0i64..4, 1i64..5, 0u64..3), 0..8).prop_map(|segments| {
        let mut run = Vec::with_capacity(segments.len());
        let mut cursor = 0i64;
        for (gap, len, value) in segments {
            let begin = cursor + gap;
            let end = begin + len;
            run.push(Interval::new(begin, end, value));
            cursor = end;
        }
        run
    })
}

/// Pointwise view of a run on the (small) test domain.
fn value_at(run: &[Interval]) -> BTreeMap<i64, u64> {
    let mut at = BTreeMap::new();
    for i in run {
        for t in i.begin..i.end {
            at.insert(t, i.value);
        }
    }
    at
}

fn records_for(price_number: u32, run: &[Interval]) -> Vec<PriceRecord> {
    run.iter()
        .map(|i| PriceRecord::new("4607001234", price_number, 1, i.begin, i.end, i.value))
        .collect()
}

fn arb_records() -> impl Strategy<Value = Vec<PriceRecord>> {
    (arb_run(), arb_run()).prop_map(|(a, b)| {
        let mut records = records_for(1, &a);
        records.extend(records_for(2, &b));
        records
    })
}

proptest! {
    #[test]
    fn output_is_sorted_compacted_and_well_formed(current in arb_run(), new in arb_run()) {
        let out = reconcile(current, new);
        for i in &out {
            prop_assert!(i.begin < i.end);
        }
        for pair in out.windows(2) {
            prop_assert!(pair[0].end <= pair[1].begin);
            prop_assert!(!(pair[0].end == pair[1].begin && pair[0].value == pair[1].value));
        }
    }

    #[test]
    fn no_instant_is_gained_or_lost(current in arb_run(), new in arb_run()) {
        let expected: BTreeSet<i64> = value_at(&current)
            .into_keys()
            .chain(value_at(&new).into_keys())
            .collect();
        let out = reconcile(current, new);
        let got: BTreeSet<i64> = value_at(&out).into_keys().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn new_wins_wherever_it_claims_an_instant(current in arb_run(), new in arb_run()) {
        let current_at = value_at(&current);
        let new_at = value_at(&new);
        let out = reconcile(current, new);
        for (t, v) in value_at(&out) {
            let expected = new_at.get(&t).or_else(|| current_at.get(&t));
            prop_assert_eq!(Some(&v), expected, "wrong value at instant {}", t);
        }
    }

    #[test]
    fn empty_current_is_identity(new in arb_records()) {
        prop_assert_eq!(merge_prices(vec![], new.clone()), new);
    }

    #[test]
    fn empty_new_preserves_current_records(current in arb_records()) {
        let mut expected = current.clone();
        expected.sort_by(|a, b| a.key().cmp(&b.key()).then(a.begin.cmp(&b.begin)));
        prop_assert_eq!(merge_prices(current, vec![]), expected);
    }

    #[test]
    fn merged_records_hold_per_key_invariants(current in arb_records(), new in arb_records()) {
        let new_at = per_key_values(&new);
        let current_at = per_key_values(&current);
        let merged = merge_prices(current, new);

        let mut by_key: BTreeMap<PriceKey, Vec<&PriceRecord>> = BTreeMap::new();
        for r in &merged {
            by_key.entry(r.key()).or_default().push(r);
        }
        for (key, records) in by_key {
            for pair in records.windows(2) {
                prop_assert!(pair[0].end <= pair[1].begin);
            }
            for r in records {
                prop_assert!(r.begin < r.end);
                for t in r.begin..r.end {
                    let expected = new_at
                        .get(&key)
                        .and_then(|at| at.get(&t))
                        .or_else(|| current_at.get(&key).and_then(|at| at.get(&t)));
                    prop_assert_eq!(Some(&r.value), expected, "wrong value at instant {}", t);
                }
            }
        }
    }
}

fn per_key_values(records: &[PriceRecord]) -> BTreeMap<PriceKey, BTreeMap<i64, u64>> {
    let mut per_key: BTreeMap<PriceKey, BTreeMap<i64, u64>> = BTreeMap::new();
    for r in records {
        let at = per_key.entry(r.key()).or_default();
        for t in r.begin..r.end {
            at.insert(t, r.value);
        }
    }
    per_key
}
