//! # Ostree - order-statistics binary search tree
//!
//! A BST over distinct `i64` keys where every node also stores the size of
//! its subtree. The sizes turn rank questions into a single root-to-leaf
//! walk:
//!
//! ```text
//!               (40,7)
//!             /        \
//!        (20,3)        (60,3)
//!        /    \        /    \
//!    (10,1) (30,1) (50,1) (70,1)
//!
//!  select(5): r(40) = 3 + 1 = 4 < 5  -> go right with 5 - 4 = 1
//!             r(60) = 1 + 1 = 2 > 1  -> go left
//!             r(50) = 0 + 1 = 1 == 1 -> 50
//! ```
//!
//! ## Module Responsibilities
//!
//! | Module       | Purpose                                              |
//! |--------------|------------------------------------------------------|
//! | [`lib.rs`]   | `OsTree`, `Node`, balanced build, simple accessors   |
//! | [`select`]   | rank query                                           |
//! | [`delete`]   | delete by key, delete by rank                        |
//! | [`traverse`] | in-order iterator, indented `(key,size)` rendering   |
//!
//! ## Shape
//!
//! [`OsTree::build`] produces a height-balanced tree from sorted keys. The
//! tree is never rebalanced, so a long run of deletions can leave it
//! lopsided; every operation is O(h) in the current height `h`.
//!
//! ## Example
//!
//! ```rust
//! use ostree::OsTree;
//!
//! let mut tree = OsTree::build(&[10, 20, 30, 40, 50, 60, 70]).unwrap();
//! assert_eq!(tree.select(4), Some(40));
//! assert_eq!(tree.delete_by_rank(4).unwrap(), 40);
//! assert_eq!(tree.select(4), Some(50));
//! ```

mod delete;
mod select;
mod traverse;

pub use traverse::Iter;

use thiserror::Error;

pub(crate) type Link = Option<Box<Node>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) key: i64,
    /// Nodes in the subtree rooted here, this one included.
    pub(crate) size: usize,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

pub(crate) fn size(link: &Link) -> usize {
    link.as_ref().map_or(0, |n| n.size)
}

/// Errors reported by tree operations. A failed operation leaves the tree
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OsTreeError {
    /// Delete was asked of a tree with no nodes.
    #[error("tree is empty")]
    EmptyTree,

    /// The rank does not name a node (ranks are 1-based).
    #[error("rank {rank} is outside 1..={len}")]
    RankOutOfRange { rank: usize, len: usize },

    #[error("key {0} not found")]
    KeyNotFound(i64),

    /// Build input is not strictly increasing at `index`.
    #[error("keys are not strictly increasing at index {index}")]
    NotSorted { index: usize },
}

/// Order-statistics tree. See the crate docs for the shape guarantees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsTree {
    pub(crate) root: Link,
}

impl OsTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a height-balanced tree from strictly increasing keys.
    ///
    /// Each subtree is rooted at the midpoint `(lo + hi) / 2` of its key
    /// range. An empty slice gives an empty tree.
    pub fn build(sorted: &[i64]) -> Result<Self, OsTreeError> {
        if let Some(i) = sorted.windows(2).position(|w| w[0] >= w[1]) {
            return Err(OsTreeError::NotSorted { index: i + 1 });
        }
        Ok(Self {
            root: build_range(sorted),
        })
    }

    pub fn len(&self) -> usize {
        size(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        fn height(link: &Link) -> usize {
            link.as_ref()
                .map_or(0, |n| 1 + height(&n.left).max(height(&n.right)))
        }
        height(&self.root)
    }

    pub fn contains(&self, key: i64) -> bool {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            if key == n.key {
                return true;
            }
            node = if key < n.key {
                n.left.as_deref()
            } else {
                n.right.as_deref()
            };
        }
        false
    }

    pub fn min(&self) -> Option<i64> {
        self.select(1)
    }

    pub fn max(&self) -> Option<i64> {
        self.select(self.len())
    }
}

fn build_range(keys: &[i64]) -> Link {
    if keys.is_empty() {
        return None;
    }
    let mid = (keys.len() - 1) / 2;
    let left = build_range(&keys[..mid]);
    let right = build_range(&keys[mid + 1..]);
    let size = 1 + size(&left) + size(&right);

    Some(Box::new(Node {
        key: keys[mid],
        size,
        left,
        right,
    }))
}

#[cfg(test)]
mod tests;
