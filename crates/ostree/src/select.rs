use opcount::{Counter, NoCount};

use crate::{size, OsTree};

impl OsTree {
    /// Returns the `rank`-th smallest key (1-based), or `None` if the rank
    /// is 0 or larger than the tree.
    pub fn select(&self, rank: usize) -> Option<i64> {
        self.select_with(rank, &mut NoCount)
    }

    pub fn select_with<C: Counter>(&self, rank: usize, counter: &mut C) -> Option<i64> {
        let mut node = self.root.as_deref();
        let mut i = rank;

        while let Some(n) = node {
            // rank of `n` inside its own subtree
            let r = size(&n.left) + 1;

            counter.compare(1);
            if i == r {
                return Some(n.key);
            }

            counter.compare(1);
            if i < r {
                node = n.left.as_deref();
            } else {
                i -= r;
                node = n.right.as_deref();
            }
        }
        None
    }
}
