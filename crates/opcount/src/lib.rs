//! # Opcount - explicit operation counters
//!
//! The merge and order-statistics crates report how much work they did
//! through a [`Counter`] passed in by the caller. There is no global state:
//! a caller that does not care passes [`NoCount`], a caller building a
//! report passes an [`OpCount`] and reads it back afterwards.
//!
//! ```rust
//! use opcount::{Counter, OpCount};
//!
//! let mut ops = OpCount::default();
//! ops.compare(2);
//! ops.assign(3);
//! assert_eq!(ops.total(), 5);
//! ```

use std::fmt;
use std::ops::AddAssign;

/// Sink for operation counts.
///
/// `compare` is called for every key comparison, `assign` for every move of
/// a key or handle. Implementations decide what (if anything) to keep.
pub trait Counter {
    /// Records `n` key comparisons.
    fn compare(&mut self, n: u64);

    /// Records `n` assignments (element appends, handle swaps, key copies).
    fn assign(&mut self, n: u64);
}

impl<C: Counter + ?Sized> Counter for &mut C {
    fn compare(&mut self, n: u64) {
        (**self).compare(n);
    }

    fn assign(&mut self, n: u64) {
        (**self).assign(n);
    }
}

/// A counter that discards everything. Used by the uncounted APIs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoCount;

impl Counter for NoCount {
    #[inline]
    fn compare(&mut self, _n: u64) {}

    #[inline]
    fn assign(&mut self, _n: u64) {}
}

/// Running totals of comparisons and assignments.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OpCount {
    pub comparisons: u64,
    pub assignments: u64,
}

impl OpCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Comparisons plus assignments.
    pub fn total(&self) -> u64 {
        self.comparisons + self.assignments
    }

    /// Zeroes both totals.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Counter for OpCount {
    #[inline]
    fn compare(&mut self, n: u64) {
        self.comparisons += n;
    }

    #[inline]
    fn assign(&mut self, n: u64) {
        self.assignments += n;
    }
}

impl AddAssign for OpCount {
    fn add_assign(&mut self, rhs: Self) {
        self.comparisons += rhs.comparisons;
        self.assignments += rhs.assignments;
    }
}

impl fmt::Display for OpCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ops ({} cmp, {} assign)",
            self.total(),
            self.comparisons,
            self.assignments
        )
    }
}
