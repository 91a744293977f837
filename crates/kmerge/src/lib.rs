//! # Kmerge - k-way merge of sorted lists
//!
//! Merges `k` non-decreasing [`SortedList`]s into one, extracting the global
//! minimum through a binary min-heap whose elements are the lists
//! themselves, ordered by their current head value.
//!
//! ## Algorithm
//!
//! ```text
//!  heap (by head)          output
//! ┌──────────────┐
//! │ [1] 4 7      │ ──pop 1──>  1
//! │ [2] 3        │
//! │ [5] 6 8 9    │
//! └──────────────┘
//!        |
//!        | root list empty?  -> replace it with the last active list
//!        | sift root down    -> O(log k)
//!        v
//!  two lists left?  -> finish with a plain two-way merge
//! ```
//!
//! Each extraction costs O(log k), so merging `n` elements costs
//! O(n log k) instead of the O(n k) of scanning every head.
//!
//! ## Preconditions
//!
//! Every input list must be non-empty. The heap compares list heads, so an
//! empty list has no key; [`merge_k`] and [`SequenceHeap::build`] return
//! [`MergeError::EmptySequence`] instead of consuming anything.
//!
//! ## Example
//!
//! ```rust
//! use kmerge::merge_k;
//! use seqlist::SortedList;
//!
//! let lists = vec![
//!     SortedList::from_sorted([1, 4, 7]).unwrap(),
//!     SortedList::from_sorted([2, 3]).unwrap(),
//!     SortedList::from_sorted([5, 6, 8, 9]).unwrap(),
//! ];
//! let mut out = SortedList::new();
//! merge_k(&mut out, lists).unwrap();
//! assert_eq!(out.to_vec(), (1..=9).collect::<Vec<_>>());
//! ```

mod heap;
mod merge;

pub use heap::{build_selection_structure, sift_down, SequenceHeap};
pub use merge::{merge_k, merge_k_with, merge_two, merge_two_with};

use seqlist::ListError;
use thiserror::Error;

/// Errors reported by the merge operations. None of them leave a partially
/// merged output behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    /// `merge_k` was called with zero lists.
    #[error("no sequences to merge")]
    NoSequences,

    /// The input list at `index` has no head to order by.
    #[error("sequence {index} is empty")]
    EmptySequence { index: usize },

    /// The output already ends above the smallest value being merged in.
    #[error("output tail {tail} is greater than the smallest input head {head}")]
    OutputAhead { tail: i64, head: i64 },

    #[error(transparent)]
    List(#[from] ListError),
}

#[cfg(test)]
mod tests;
