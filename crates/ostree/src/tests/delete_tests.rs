use super::{assert_valid, sample_tree};
use crate::*;
use anyhow::Result;

// -------------------- Delete by rank --------------------

#[test]
fn delete_by_rank_scenario() -> Result<()> {
    let mut tree = sample_tree();
    assert_eq!(tree.delete_by_rank(4)?, 40);
    assert_eq!(tree.in_order(), vec![10, 20, 30, 50, 60, 70]);
    assert_eq!(tree.select(4), Some(50));
    assert_eq!(assert_valid(&tree), 6);
    Ok(())
}

#[test]
fn delete_root_with_two_children_overwrites_in_place() -> Result<()> {
    let mut tree = sample_tree();
    tree.delete_key(40)?;

    // successor 50 moved up into the root slot
    let root = tree.root.as_ref().unwrap();
    assert_eq!(root.key, 50);
    assert_eq!(root.size, 6);
    assert_eq!(root.right.as_ref().unwrap().size, 2);
    assert_valid(&tree);
    Ok(())
}

#[test]
fn delete_leaf() -> Result<()> {
    let mut tree = sample_tree();
    tree.delete_key(10)?;
    assert_eq!(tree.in_order(), vec![20, 30, 40, 50, 60, 70]);
    assert_eq!(tree.root.as_ref().unwrap().left.as_ref().unwrap().size, 2);
    assert_valid(&tree);
    Ok(())
}

#[test]
fn delete_node_with_one_child_splices() -> Result<()> {
    let mut tree = sample_tree();
    tree.delete_key(10)?;
    // 20 now only has a right child
    tree.delete_key(20)?;

    let root = tree.root.as_ref().unwrap();
    assert_eq!(root.left.as_ref().unwrap().key, 30);
    assert_eq!(tree.in_order(), vec![30, 40, 50, 60, 70]);
    assert_valid(&tree);
    Ok(())
}

#[test]
fn delete_everything_by_rank() -> Result<()> {
    let keys: Vec<i64> = (1..=64).collect();
    let mut tree = OsTree::build(&keys)?;

    let mut expected = keys.clone();
    while !expected.is_empty() {
        let rank = expected.len() / 2 + 1;
        let removed = tree.delete_by_rank(rank)?;
        assert_eq!(removed, expected.remove(rank - 1));
        assert_eq!(tree.in_order(), expected);
        assert_valid(&tree);
    }
    assert!(tree.is_empty());
    Ok(())
}

#[test]
fn delete_last_node_empties_tree() -> Result<()> {
    let mut tree = OsTree::build(&[5])?;
    assert_eq!(tree.delete_by_rank(1)?, 5);
    assert!(tree.is_empty());
    assert_eq!(tree.delete_by_rank(1), Err(OsTreeError::EmptyTree));
    Ok(())
}

// -------------------- Errors --------------------

#[test]
fn delete_from_empty_tree_is_error() {
    let mut tree = OsTree::new();
    assert_eq!(tree.delete_by_rank(1), Err(OsTreeError::EmptyTree));
}

#[test]
fn delete_out_of_range_leaves_tree_unchanged() {
    let mut tree = sample_tree();
    let before = tree.clone();

    assert_eq!(
        tree.delete_by_rank(8),
        Err(OsTreeError::RankOutOfRange { rank: 8, len: 7 })
    );
    assert_eq!(
        tree.delete_by_rank(0),
        Err(OsTreeError::RankOutOfRange { rank: 0, len: 7 })
    );
    assert_eq!(tree, before);
}

#[test]
fn delete_missing_key_keeps_sizes() {
    let mut tree = sample_tree();
    let before = tree.clone();

    assert_eq!(tree.delete_key(45), Err(OsTreeError::KeyNotFound(45)));
    assert_eq!(tree, before);
    assert_valid(&tree);
}

// -------------------- Degradation --------------------

#[test]
fn deletes_never_rebalance() -> Result<()> {
    let keys: Vec<i64> = (0..127).collect();
    let mut tree = OsTree::build(&keys)?;
    let full_height = tree.height();

    // Strip the whole left half; the right half keeps its height.
    for _ in 0..63 {
        tree.delete_by_rank(1)?;
    }
    assert_eq!(tree.len(), 64);
    assert_eq!(tree.height(), full_height);
    assert_valid(&tree);
    Ok(())
}
