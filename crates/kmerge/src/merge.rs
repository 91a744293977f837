use opcount::{Counter, NoCount};
use seqlist::SortedList;
use tracing::debug;

use crate::{MergeError, SequenceHeap};

fn append<C: Counter>(out: &mut SortedList, value: i64, counter: &mut C) -> Result<(), MergeError> {
    out.push_back(value)?;
    counter.assign(1);
    Ok(())
}

fn drain_into<C: Counter>(
    out: &mut SortedList,
    mut list: SortedList,
    counter: &mut C,
) -> Result<(), MergeError> {
    while let Some(v) = list.pop_front() {
        append(out, v, counter)?;
    }
    Ok(())
}

/// Rejects an output whose tail is above `smallest_head`, so that no append
/// can fail halfway through a merge.
fn check_output(out: &SortedList, smallest_head: Option<i64>) -> Result<(), MergeError> {
    match (out.back(), smallest_head) {
        (Some(tail), Some(head)) if tail > head => Err(MergeError::OutputAhead { tail, head }),
        _ => Ok(()),
    }
}

pub fn merge_two(out: &mut SortedList, a: SortedList, b: SortedList) -> Result<(), MergeError> {
    merge_two_with(out, a, b, &mut NoCount)
}

/// Two-pointer merge of `a` and `b` onto the tail of `out`, consuming both.
///
/// When the heads are equal both are appended, `a`'s first. Either input may
/// be empty.
pub fn merge_two_with<C: Counter>(
    out: &mut SortedList,
    mut a: SortedList,
    mut b: SortedList,
    counter: &mut C,
) -> Result<(), MergeError> {
    check_output(out, a.front().into_iter().chain(b.front()).min())?;

    while let (Some(x), Some(y)) = (a.front(), b.front()) {
        counter.compare(1);
        if x < y {
            append(out, x, counter)?;
            a.pop_front();
            continue;
        }

        counter.compare(1);
        if x > y {
            append(out, y, counter)?;
            b.pop_front();
        } else {
            append(out, x, counter)?;
            append(out, y, counter)?;
            a.pop_front();
            b.pop_front();
        }
    }

    drain_into(out, a, counter)?;
    drain_into(out, b, counter)
}

pub fn merge_k(out: &mut SortedList, lists: Vec<SortedList>) -> Result<(), MergeError> {
    merge_k_with(out, lists, &mut NoCount)
}

/// Merges all `lists` onto the tail of `out`.
///
/// * one list is drained straight into `out`;
/// * two lists go through [`merge_two_with`];
/// * otherwise the lists are heapified and the root head is extracted until
///   two lists remain, which are then merged directly.
///
/// Every precondition (at least one list, no empty list, `out` not ahead
/// of the inputs) is checked before anything is consumed.
pub fn merge_k_with<C: Counter>(
    out: &mut SortedList,
    mut lists: Vec<SortedList>,
    counter: &mut C,
) -> Result<(), MergeError> {
    if lists.is_empty() {
        return Err(MergeError::NoSequences);
    }
    if let Some(index) = lists.iter().position(SortedList::is_empty) {
        return Err(MergeError::EmptySequence { index });
    }
    check_output(out, lists.iter().filter_map(SortedList::front).min())?;

    match lists.len() {
        1 => {
            let only = lists.swap_remove(0);
            drain_into(out, only, counter)
        }
        2 => {
            let b = lists.swap_remove(1);
            let a = lists.swap_remove(0);
            merge_two_with(out, a, b, counter)
        }
        k => {
            let mut heap = SequenceHeap::build_with(lists, counter)?;
            while heap.active() > 2 {
                let Some(v) = heap.pop_min_with(counter) else {
                    break;
                };
                append(out, v, counter)?;
            }

            debug!(k, merged = out.len(), "switching to two-way merge");
            let mut rest = heap.into_lists().into_iter();
            let a = rest.next().unwrap_or_default();
            let b = rest.next().unwrap_or_default();
            merge_two_with(out, a, b, counter)
        }
    }
}
