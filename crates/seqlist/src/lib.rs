//! # Seqlist - sorted singly-linked sequences
//!
//! A [`SortedList`] is an ordered sequence of `i64` that only grows at the
//! tail and only shrinks at the head, and whose values never decrease from
//! head to tail. It is the input and output type of the `kmerge` crate.
//!
//! ## Layout
//!
//! Nodes live in a per-list arena and link to each other by slot index:
//!
//! ```text
//!  head                                tail
//!   |                                   |
//!   v                                   v
//! ┌─────┬──────┐   ┌─────┬──────┐   ┌─────┬──────┐
//! │  1  │ next ┼──>│  4  │ next ┼──>│  7  │ None │
//! └─────┴──────┘   └─────┴──────┘   └─────┴──────┘
//!  slot 2           slot 0           slot 1
//! ```
//!
//! `pop_front` returns the head slot to a free list that the next
//! `push_back` reuses, so a list that is drained and refilled does not
//! keep growing its arena.

use std::fmt;
use thiserror::Error;

/// Errors returned when an operation would break the ordering invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// `value` is smaller than the current tail.
    #[error("value {value} is smaller than the tail {tail}")]
    OutOfOrder { tail: i64, value: i64 },
}

#[derive(Debug, Clone)]
struct Slot {
    value: i64,
    next: Option<usize>,
}

/// Non-decreasing singly-linked list of integers.
#[derive(Debug, Clone, Default)]
pub struct SortedList {
    slots: Vec<Slot>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl SortedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list whose arena can hold `capacity` nodes without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Builds a list from values that are already in non-decreasing order.
    pub fn from_sorted<I: IntoIterator<Item = i64>>(values: I) -> Result<Self, ListError> {
        let values = values.into_iter();
        let mut list = Self::with_capacity(values.size_hint().0);
        for v in values {
            list.push_back(v)?;
        }
        Ok(list)
    }

    /// Appends `value` at the tail.
    ///
    /// Fails without modifying the list if `value` is smaller than the
    /// current tail.
    pub fn push_back(&mut self, value: i64) -> Result<(), ListError> {
        if let Some(tail) = self.back() {
            if value < tail {
                return Err(ListError::OutOfOrder { tail, value });
            }
        }

        let slot = Slot { value, next: None };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = slot;
                idx
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        };

        match self.tail {
            Some(t) => self.slots[t].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the head value, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<i64> {
        let idx = self.head?;
        let value = self.slots[idx].value;
        let next = self.slots[idx].next;

        self.head = next;
        if next.is_none() {
            self.tail = None;
        }
        self.len -= 1;

        if self.len == 0 {
            // Nothing is live; drop the whole arena instead of tracking slots.
            self.slots.clear();
            self.free.clear();
        } else {
            self.free.push(idx);
        }
        Some(value)
    }

    /// Smallest value (the head).
    pub fn front(&self) -> Option<i64> {
        self.head.map(|idx| self.slots[idx].value)
    }

    /// Largest value (the tail).
    pub fn back(&self) -> Option<i64> {
        self.tail.map(|idx| self.slots[idx].value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterates from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }
}

/// Borrowing iterator returned by [`SortedList::iter`].
pub struct Iter<'a> {
    list: &'a SortedList,
    cursor: Option<usize>,
}

impl Iterator for Iter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let idx = self.cursor?;
        let slot = &self.list.slots[idx];
        self.cursor = slot.next;
        Some(slot.value)
    }
}

impl<'a> IntoIterator for &'a SortedList {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl PartialEq for SortedList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for SortedList {}

/// Space-separated values, or `No elements` for an empty list.
impl fmt::Display for SortedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("No elements");
        }
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}
