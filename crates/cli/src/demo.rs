//! Proof-of-correctness walkthrough printed by the `DEMO` command.

use anyhow::{ensure, Result};
use kmerge::merge_k;
use ostree::OsTree;
use rand::Rng;
use seqlist::SortedList;
use std::io::Write;

use crate::gen::{build_lists, sorted_unique_keys};

const DEMO_K: usize = 4;
const DEMO_N: usize = 22;
const DEMO_TREE_KEYS: usize = 11;
const DEMO_DELETES: usize = 3;

pub fn run<R: Rng + ?Sized, W: Write>(rng: &mut R, out: &mut W) -> Result<()> {
    merge_demo(rng, out)?;
    writeln!(out)?;
    tree_demo(rng, out)
}

fn merge_demo<R: Rng + ?Sized, W: Write>(rng: &mut R, out: &mut W) -> Result<()> {
    writeln!(out, "Merge of k = {}, n = {}:", DEMO_K, DEMO_N)?;
    let lists = build_lists(rng, DEMO_K, DEMO_N)?;
    writeln!(out, "The generated lists:")?;
    for (i, l) in lists.iter().enumerate() {
        writeln!(out, "List {}: {}", i + 1, l)?;
    }

    let mut expected: Vec<i64> = lists.iter().flat_map(SortedList::iter).collect();
    expected.sort_unstable();

    let mut merged = SortedList::with_capacity(DEMO_N);
    merge_k(&mut merged, lists)?;
    writeln!(out, "The merged list:")?;
    writeln!(out, "{}", merged)?;

    ensure!(merged.to_vec() == expected, "merged list is not the sorted input");
    Ok(())
}

fn tree_demo<R: Rng + ?Sized, W: Write>(rng: &mut R, out: &mut W) -> Result<()> {
    let keys = sorted_unique_keys(rng, DEMO_TREE_KEYS, 10_000)?;
    let mut tree = OsTree::build(&keys)?;
    writeln!(out, "Tree built from {} keys:", keys.len())?;
    write!(out, "{}", tree)?;

    let mut deleted = Vec::with_capacity(DEMO_DELETES);
    for _ in 0..DEMO_DELETES {
        let rank = rng.gen_range(1..=tree.len());
        let key = tree.delete_by_rank(rank)?;
        deleted.push(key);
        writeln!(out)?;
        writeln!(out, "Deleted rank {} (key {}):", rank, key)?;
        write!(out, "{}", tree)?;
    }

    check_remaining(&tree, &keys, &deleted)
}

/// Fails unless `tree` holds exactly `keys` without `deleted`, in order.
pub(crate) fn check_remaining(tree: &OsTree, keys: &[i64], deleted: &[i64]) -> Result<()> {
    let expected: Vec<i64> = keys
        .iter()
        .copied()
        .filter(|k| !deleted.contains(k))
        .collect();
    ensure!(
        expected.len() + deleted.len() == keys.len(),
        "deleted keys {:?} were not all in the tree",
        deleted
    );
    ensure!(
        tree.in_order() == expected,
        "tree holds {:?}, expected {:?}",
        tree.in_order(),
        expected
    );
    Ok(())
}
