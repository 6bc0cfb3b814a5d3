use super::group::Interval;

/// How the pending current interval relates to the pending new interval.
///
/// [`classify`] checks the variants in declaration order and the first match
/// wins. Disjoint cases come first so touching boundaries (half-open
/// `end == begin`) never count as overlap; the agreeing-value case precedes
/// enclosure so intervals that carry the same price union instead of
/// fragmenting; enclosure precedes the generic partial overlaps because it
/// needs a three-way split where an overlap needs only two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    /// `current` ends at or before `new` begins.
    CurrentPrecedes,
    /// `new` ends at or before `current` begins.
    NewPrecedes,
    /// The two overlap and carry the same value.
    AgreeingOverlap,
    /// `current` spans all of `new`.
    CurrentEncloses,
    /// `new` spans all of `current`.
    NewEncloses,
    /// `current` starts first and overlaps the head of `new`.
    CurrentLeads,
    /// `new` starts first and overlaps the head of `current`.
    NewLeads,
}

const fn classify(curr: Interval, new: Interval) -> Relation {
    if curr.end <= new.begin {
        Relation::CurrentPrecedes
    } else if new.end <= curr.begin {
        Relation::NewPrecedes
    } else if curr.value == new.value {
        Relation::AgreeingOverlap
    } else if curr.begin <= new.begin && curr.end >= new.end {
        Relation::CurrentEncloses
    } else if new.begin <= curr.begin && new.end >= curr.end {
        Relation::NewEncloses
    } else if curr.begin <= new.begin {
        Relation::CurrentLeads
    } else {
        Relation::NewLeads
    }
}

/// Append `el` to the result, coalescing with the last interval when they
/// touch and agree on value. Empty-length fragments (produced by the
/// enclosure rules when boundaries coincide) carry no instants and are
/// dropped.
fn push_coalesced(out: &mut Vec<Interval>, el: Interval) {
    if el.begin >= el.end {
        return;
    }
    match out.last_mut() {
        Some(last) if last.end == el.begin && last.value == el.value => last.end = el.end,
        _ => out.push(el),
    }
}

/// Merge one key's current interval run with its new run.
///
/// Both inputs must be sorted by `begin` and non-overlapping within
/// themselves; [`group_by_key`](super::group::group_by_key) establishes the
/// sort. The output is sorted, non-overlapping, compacted (no two adjacent
/// intervals share a boundary and a value), and covers exactly the instants
/// covered by either input: wherever the runs disagree on value the new
/// interval wins for every instant it claims, and wherever they agree the
/// periods are unioned.
///
/// A single forward sweep holds at most one pending interval per side,
/// refilled from its run on demand. Overlap handling emits the settled left
/// part and keeps the unsettled right remainder pending, so one interval can
/// take part in several splits against the other run.
#[must_use]
pub fn reconcile(current: Vec<Interval>, new: Vec<Interval>) -> Vec<Interval> {
    let mut out = Vec::with_capacity(current.len() + new.len());
    let mut current_run = current.into_iter();
    let mut new_run = new.into_iter();
    let mut curr_el: Option<Interval> = None;
    let mut new_el: Option<Interval> = None;

    loop {
        let Some(curr) = curr_el.take().or_else(|| current_run.next()) else {
            break;
        };
        let Some(new) = new_el.take().or_else(|| new_run.next()) else {
            curr_el = Some(curr);
            break;
        };

        match classify(curr, new) {
            Relation::CurrentPrecedes => {
                push_coalesced(&mut out, curr);
                new_el = Some(new);
            }
            Relation::NewPrecedes => {
                push_coalesced(&mut out, new);
                curr_el = Some(curr);
            }
            Relation::AgreeingOverlap => {
                push_coalesced(
                    &mut out,
                    Interval::new(curr.begin.min(new.begin), curr.end.max(new.end), curr.value),
                );
            }
            Relation::CurrentEncloses => {
                push_coalesced(&mut out, Interval::new(curr.begin, new.begin, curr.value));
                push_coalesced(&mut out, new);
                curr_el = Some(Interval::new(new.end, curr.end, curr.value));
            }
            Relation::NewEncloses => {
                push_coalesced(&mut out, Interval::new(new.begin, curr.end, new.value));
                new_el = Some(Interval::new(curr.end, new.end, new.value));
            }
            Relation::CurrentLeads => {
                push_coalesced(&mut out, Interval::new(curr.begin, new.begin, curr.value));
                push_coalesced(&mut out, Interval::new(new.begin, curr.end, new.value));
                new_el = Some(Interval::new(curr.end, new.end, new.value));
            }
            Relation::NewLeads => {
                push_coalesced(&mut out, new);
                curr_el = Some(Interval::new(new.end, curr.end, curr.value));
            }
        }
    }

    // One side ran dry; at most one cursor still holds a remainder.
    if let Some(el) = curr_el {
        push_coalesced(&mut out, el);
    }
    if let Some(el) = new_el {
        push_coalesced(&mut out, el);
    }
    for el in current_run {
        push_coalesced(&mut out, el);
    }
    for el in new_run {
        push_coalesced(&mut out, el);
    }

    out
}
