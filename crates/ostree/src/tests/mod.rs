mod delete_tests;

use crate::{Link, OsTree};

/// Walks the whole tree checking BST order and every stored size.
/// Returns the number of nodes seen.
pub(crate) fn assert_valid(tree: &OsTree) -> usize {
    fn walk(link: &Link, lo: Option<i64>, hi: Option<i64>) -> usize {
        let Some(n) = link else {
            return 0;
        };
        if let Some(lo) = lo {
            assert!(n.key > lo, "key {} not above {}", n.key, lo);
        }
        if let Some(hi) = hi {
            assert!(n.key < hi, "key {} not below {}", n.key, hi);
        }
        let left = walk(&n.left, lo, Some(n.key));
        let right = walk(&n.right, Some(n.key), hi);
        assert_eq!(n.size, 1 + left + right, "bad size at key {}", n.key);
        n.size
    }
    let seen = walk(&tree.root, None, None);
    assert_eq!(seen, tree.len());
    seen
}

pub(crate) fn sample_tree() -> OsTree {
    OsTree::build(&[10, 20, 30, 40, 50, 60, 70]).unwrap()
}
