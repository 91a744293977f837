use std::fmt;

use crate::{Link, Node, OsTree};

/// In-order iterator over the keys of an [`OsTree`].
///
/// Holds the left spine of the unvisited part of the tree on an explicit
/// stack, so it never recurses.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn new(tree: &'a OsTree) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let n = self.stack.pop()?;
        self.push_left_spine(n.right.as_deref());
        self.remaining -= 1;
        Some(n.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl OsTree {
    /// Keys in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    pub fn in_order(&self) -> Vec<i64> {
        self.iter().collect()
    }

    /// `(key, size)` pairs in ascending key order.
    pub fn in_order_sizes(&self) -> Vec<(i64, usize)> {
        fn walk(link: &Link, out: &mut Vec<(i64, usize)>) {
            if let Some(n) = link {
                walk(&n.left, out);
                out.push((n.key, n.size));
                walk(&n.right, out);
            }
        }
        let mut out = Vec::with_capacity(self.len());
        walk(&self.root, &mut out);
        out
    }
}

impl<'a> IntoIterator for &'a OsTree {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Sideways drawing: one `(key,size)` per line in key order, indented four
/// spaces per level below the root.
impl fmt::Display for OsTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn draw(link: &Link, level: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            if let Some(n) = link {
                draw(&n.left, level + 1, f)?;
                writeln!(f, "{:indent$}({},{})", "", n.key, n.size, indent = 4 * level)?;
                draw(&n.right, level + 1, f)?;
            }
            Ok(())
        }

        if self.is_empty() {
            return writeln!(f, "(empty)");
        }
        draw(&self.root, 0, f)
    }
}
