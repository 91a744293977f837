use opcount::{Counter, NoCount};
use std::cmp::Ordering;
use tracing::debug;

use crate::{Link, OsTree, OsTreeError};

impl OsTree {
    /// Removes `key`.
    ///
    /// A node with at most one child is replaced by that child. A node with
    /// two children takes its in-order successor's key, and the successor
    /// is then removed from the right subtree. Every node on the path loses
    /// exactly one from its size.
    pub fn delete_key(&mut self, key: i64) -> Result<(), OsTreeError> {
        self.delete_key_with(key, &mut NoCount)
    }

    pub fn delete_key_with<C: Counter>(
        &mut self,
        key: i64,
        counter: &mut C,
    ) -> Result<(), OsTreeError> {
        if remove(&mut self.root, key, counter) {
            Ok(())
        } else {
            debug!(key, "delete: key not found");
            Err(OsTreeError::KeyNotFound(key))
        }
    }

    /// Removes the `rank`-th smallest key and returns it.
    ///
    /// Fails with [`OsTreeError::EmptyTree`] or
    /// [`OsTreeError::RankOutOfRange`] and leaves the tree unchanged.
    pub fn delete_by_rank(&mut self, rank: usize) -> Result<i64, OsTreeError> {
        self.delete_by_rank_with(rank, &mut NoCount)
    }

    pub fn delete_by_rank_with<C: Counter>(
        &mut self,
        rank: usize,
        counter: &mut C,
    ) -> Result<i64, OsTreeError> {
        if self.is_empty() {
            debug!(rank, "delete: tree is empty");
            return Err(OsTreeError::EmptyTree);
        }

        let key = match self.select_with(rank, counter) {
            Some(key) => key,
            None => {
                debug!(rank, len = self.len(), "delete: rank out of range");
                return Err(OsTreeError::RankOutOfRange {
                    rank,
                    len: self.len(),
                });
            }
        };

        self.delete_key_with(key, counter)?;
        Ok(key)
    }
}

/// Smallest key under `link`.
fn leftmost_key<C: Counter>(link: &Link, counter: &mut C) -> Option<i64> {
    let mut node = link.as_deref()?;
    while let Some(left) = node.left.as_deref() {
        counter.compare(1);
        node = left;
    }
    Some(node.key)
}

/// Deletes `key` from the subtree at `link`, returning whether a node was
/// removed. Sizes are only touched on the way back up from a successful
/// removal, so a missing key leaves the subtree as it was.
fn remove<C: Counter>(link: &mut Link, key: i64, counter: &mut C) -> bool {
    let Some(node) = link.as_mut() else {
        return false;
    };

    counter.compare(1);
    let removed = match key.cmp(&node.key) {
        Ordering::Less => remove(&mut node.left, key, counter),
        Ordering::Greater => remove(&mut node.right, key, counter),
        Ordering::Equal if node.left.is_some() => match leftmost_key(&node.right, counter) {
            Some(succ) => {
                node.key = succ;
                counter.assign(1);
                remove(&mut node.right, succ, counter)
            }
            None => {
                let child = node.left.take();
                *link = child;
                counter.assign(1);
                return true;
            }
        },
        Ordering::Equal => {
            let child = node.right.take();
            *link = child;
            counter.assign(1);
            return true;
        }
    };

    if removed {
        node.size -= 1;
    }
    removed
}
