//! CSV operation-count reports.
//!
//! ```text
//! merge_by_n.csv     k,n,operations                 k fixed, n growing
//! merge_by_k.csv     k,operations                   n fixed, k growing
//! ostree_delete.csv  n,select_ops,delete_ops,total  n random deletes
//! ```

use anyhow::{ensure, Context, Result};
use kmerge::merge_k_with;
use opcount::OpCount;
use ostree::OsTree;
use rand::Rng;
use serde::Serialize;
use seqlist::SortedList;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::gen::{build_lists, sorted_unique_keys};

/// Input sizes for one report run.
#[derive(Debug, Clone)]
pub struct ReportPlan {
    /// List counts for `merge_by_n.csv`.
    pub merge_ks: Vec<usize>,
    /// Total element counts for `merge_by_n.csv`.
    pub merge_ns: Vec<usize>,
    /// List counts for `merge_by_k.csv`.
    pub sweep_ks: Vec<usize>,
    /// Total element count for `merge_by_k.csv`.
    pub sweep_n: usize,
    /// Keys in each freshly built tree.
    pub tree_keys: usize,
    /// Number of random deletions per `ostree_delete.csv` row.
    pub delete_counts: Vec<usize>,
}

impl ReportPlan {
    /// The lab-sized plan.
    pub fn full() -> Self {
        Self {
            merge_ks: vec![5, 10, 100],
            merge_ns: (1..=10).map(|i| i * 400).collect(),
            sweep_ks: (1..=50).map(|i| i * 10).collect(),
            sweep_n: 10_000,
            tree_keys: 10_001,
            delete_counts: (10..=50).map(|i| i * 100).collect(),
        }
    }

    /// A small plan that finishes instantly.
    pub fn quick() -> Self {
        Self {
            merge_ks: vec![3, 5],
            merge_ns: vec![20, 40],
            sweep_ks: vec![2, 4, 8],
            sweep_n: 64,
            tree_keys: 101,
            delete_counts: vec![10, 50],
        }
    }
}

/// Paths of the files written by [`write_reports`].
#[derive(Debug, Clone)]
pub struct ReportFiles {
    pub merge_by_n: PathBuf,
    pub merge_by_k: PathBuf,
    pub ostree_delete: PathBuf,
}

#[derive(Debug, Serialize)]
struct MergeByNRow {
    k: usize,
    n: usize,
    operations: u64,
}

#[derive(Debug, Serialize)]
struct MergeByKRow {
    k: usize,
    operations: u64,
}

#[derive(Debug, Serialize)]
struct DeleteRow {
    n: usize,
    select_ops: u64,
    delete_ops: u64,
    total: u64,
}

/// Operations spent merging `k` random lists holding `n` elements.
pub fn merge_ops<R: Rng + ?Sized>(rng: &mut R, k: usize, n: usize) -> Result<u64> {
    let lists = build_lists(rng, k, n)?;
    let mut out = SortedList::with_capacity(n);
    let mut ops = OpCount::new();
    merge_k_with(&mut out, lists, &mut ops)?;
    ensure!(out.len() == n, "merged {} elements, expected {}", out.len(), n);
    Ok(ops.total())
}

/// Average (select, delete) operations over `trials` runs of `deletes`
/// random-rank deletions from a fresh tree of `tree_keys` keys.
pub fn delete_ops<R: Rng + ?Sized>(
    rng: &mut R,
    tree_keys: usize,
    deletes: usize,
    trials: usize,
) -> Result<(u64, u64)> {
    ensure!(trials >= 1, "need at least one trial");
    ensure!(
        deletes <= tree_keys,
        "cannot delete {} keys from a tree of {}",
        deletes,
        tree_keys
    );

    let mut select = OpCount::new();
    let mut delete = OpCount::new();
    for _ in 0..trials {
        let keys = sorted_unique_keys(rng, tree_keys, 2 * tree_keys as i64)?;
        let mut tree = OsTree::build(&keys)?;

        for _ in 0..deletes {
            let rank = rng.gen_range(1..=tree.len());
            let key = tree
                .select_with(rank, &mut select)
                .with_context(|| format!("rank {} vanished", rank))?;
            tree.delete_key_with(key, &mut delete)?;
        }
    }

    let trials = trials as u64;
    Ok((select.total() / trials, delete.total() / trials))
}

/// Runs every table in `plan` and writes the CSV files into `dir`.
pub fn write_reports<R: Rng + ?Sized>(
    dir: &Path,
    plan: &ReportPlan,
    trials: usize,
    rng: &mut R,
) -> Result<ReportFiles> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating report dir {}", dir.display()))?;

    let files = ReportFiles {
        merge_by_n: dir.join("merge_by_n.csv"),
        merge_by_k: dir.join("merge_by_k.csv"),
        ostree_delete: dir.join("ostree_delete.csv"),
    };

    let mut wtr = csv::Writer::from_path(&files.merge_by_n)?;
    for &k in &plan.merge_ks {
        for &n in &plan.merge_ns {
            let operations = merge_ops(rng, k, n)?;
            wtr.serialize(MergeByNRow { k, n, operations })?;
        }
    }
    wtr.flush()?;
    info!(path = %files.merge_by_n.display(), "wrote merge-by-n report");

    let mut wtr = csv::Writer::from_path(&files.merge_by_k)?;
    for &k in &plan.sweep_ks {
        let operations = merge_ops(rng, k, plan.sweep_n)?;
        wtr.serialize(MergeByKRow { k, operations })?;
    }
    wtr.flush()?;
    info!(path = %files.merge_by_k.display(), "wrote merge-by-k report");

    let mut wtr = csv::Writer::from_path(&files.ostree_delete)?;
    for &n in &plan.delete_counts {
        let (select, delete) = delete_ops(rng, plan.tree_keys, n, trials)?;
        wtr.serialize(DeleteRow {
            n,
            select_ops: select,
            delete_ops: delete,
            total: select + delete,
        })?;
    }
    wtr.flush()?;
    info!(path = %files.ostree_delete.display(), "wrote order-statistics report");

    Ok(files)
}
