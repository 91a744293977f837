//! Binary min-heap of lists, keyed by each list's head.
//!
//! The heap is an implicit array: the children of slot `i` are `2i + 1` and
//! `2i + 2`, and the active count is simply the slice length. A list that
//! runs dry is evicted by moving the last active list into its slot.

use opcount::{Counter, NoCount};
use seqlist::SortedList;
use tracing::trace;

use crate::MergeError;

/// `true` if `a` should sit above `b` in the heap.
///
/// Empty lists never win, so a violated precondition sinks the empty list
/// instead of panicking.
fn head_less(a: &SortedList, b: &SortedList) -> bool {
    match (a.front(), b.front()) {
        (Some(x), Some(y)) => x < y,
        (Some(_), None) => true,
        _ => false,
    }
}

/// Restores the heap property for the subtree rooted at `root`, assuming
/// both child subtrees already satisfy it. `lists.len()` is the active count.
///
/// Walks down while a strictly smaller child exists; equal heads stay put.
pub fn sift_down<C: Counter>(lists: &mut [SortedList], mut root: usize, counter: &mut C) {
    let active = lists.len();
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut smallest = root;

        if left < active {
            counter.compare(1);
            if head_less(&lists[left], &lists[smallest]) {
                smallest = left;
            }
        }

        if right < active {
            counter.compare(1);
            if head_less(&lists[right], &lists[smallest]) {
                smallest = right;
            }
        }

        if smallest == root {
            return;
        }

        lists.swap(root, smallest);
        counter.assign(3);
        root = smallest;
    }
}

/// Arranges `lists` into a min-heap by head value, bottom-up from the last
/// internal slot to the root.
///
/// Fails with [`MergeError::EmptySequence`] before touching anything if any
/// list is empty.
pub fn build_selection_structure<C: Counter>(
    lists: &mut [SortedList],
    counter: &mut C,
) -> Result<(), MergeError> {
    if let Some(index) = lists.iter().position(SortedList::is_empty) {
        return Err(MergeError::EmptySequence { index });
    }

    for root in (0..lists.len() / 2).rev() {
        sift_down(lists, root, counter);
    }
    Ok(())
}

/// Owning selection structure over a set of sorted lists.
///
/// Iterating a `SequenceHeap` yields every element of every list in
/// non-decreasing order, which is a lazy k-way merge on its own. The
/// [`merge_k`](crate::merge_k) driver stops early and finishes the last two
/// lists with a two-way merge.
#[derive(Debug, Clone)]
pub struct SequenceHeap {
    lists: Vec<SortedList>,
}

impl SequenceHeap {
    /// Takes ownership of `lists` and heapifies them.
    pub fn build(lists: Vec<SortedList>) -> Result<Self, MergeError> {
        Self::build_with(lists, &mut NoCount)
    }

    pub fn build_with<C: Counter>(
        mut lists: Vec<SortedList>,
        counter: &mut C,
    ) -> Result<Self, MergeError> {
        build_selection_structure(&mut lists, counter)?;
        Ok(Self { lists })
    }

    /// Number of lists that still hold elements.
    pub fn active(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// The global minimum: the head of the root list.
    pub fn peek_min(&self) -> Option<i64> {
        self.lists.first().and_then(SortedList::front)
    }

    pub fn pop_min(&mut self) -> Option<i64> {
        self.pop_min_with(&mut NoCount)
    }

    /// Removes the global minimum, evicting the root list if that emptied
    /// it, then re-sifts the root.
    pub fn pop_min_with<C: Counter>(&mut self, counter: &mut C) -> Option<i64> {
        let root = self.lists.first_mut()?;
        let value = root.pop_front()?;

        if root.is_empty() {
            self.lists.swap_remove(0);
            counter.assign(1);
            trace!(active = self.lists.len(), "evicted drained list");
        }

        sift_down(&mut self.lists, 0, counter);
        Some(value)
    }

    /// The active lists in heap order.
    pub fn lists(&self) -> &[SortedList] {
        &self.lists
    }

    pub fn into_lists(self) -> Vec<SortedList> {
        self.lists
    }
}

impl Iterator for SequenceHeap {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.pop_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.lists.iter().map(SortedList::len).sum();
        (n, Some(n))
    }
}
