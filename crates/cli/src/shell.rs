//! Command interpreter behind the interactive shell.
//!
//! Each input line is one command. [`Shell::execute`] writes the command's
//! output and returns an error for bad input; the caller prints that as
//! `ERR ...` and keeps going.

use anyhow::{bail, Context, Result};
use config::Config;
use kmerge::merge_k_with;
use opcount::OpCount;
use ostree::OsTree;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seqlist::SortedList;
use std::io::Write;
use tracing::debug;

use crate::demo;
use crate::gen::{build_lists, sorted_unique_keys};
use crate::report::{write_reports, ReportPlan};

/// Above this many elements `RANDMERGE` prints a summary instead of the
/// full lists.
const PRINT_LIMIT: usize = 200;

/// Largest element or key count accepted by `RANDMERGE` and `BUILD`.
const MAX_GENERATED: usize = 10_000_000;

pub const HELP: &str = "\
Commands:
  MERGE a,b,c d,e ...   Merge explicit sorted lists
  RANDMERGE k n         Merge k random lists holding n elements
  BUILD n               Build a tree from n random distinct keys
  LOAD k1 k2 ...        Build a tree from ascending keys
  SELECT i              Print the i-th smallest key
  DELETE [i]            Delete the i-th smallest key (random if omitted)
  SHOW                  Print the tree as indented (key,size)
  INORDER               Print the keys in order
  DEMO                  Proof-of-correctness walkthrough
  REPORT [quick]        Write CSV operation-count reports
  HELP                  Show this text
  EXIT / QUIT           Leave";

/// What the read loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell {
    cfg: Config,
    rng: StdRng,
    tree: OsTree,
}

fn parse_arg<T>(arg: Option<&str>, usage: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match arg {
        Some(a) => a
            .parse()
            .with_context(|| format!("bad number {:?}; usage: {}", a, usage)),
        None => bail!("usage: {}", usage),
    }
}

fn check_generated(n: usize) -> Result<()> {
    if n > MAX_GENERATED {
        bail!("{} is too large; at most {} can be generated", n, MAX_GENERATED);
    }
    Ok(())
}

fn parse_list(arg: &str, index: usize) -> Result<SortedList> {
    let values = arg
        .split(',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("list {} is not a comma-separated list of integers", index))?;
    SortedList::from_sorted(values).with_context(|| format!("list {} is not sorted", index))
}

fn merge_and_print<W: Write>(
    lists: Vec<SortedList>,
    verbose: bool,
    out: &mut W,
) -> Result<()> {
    let n: usize = lists.iter().map(SortedList::len).sum();
    if verbose {
        for (i, l) in lists.iter().enumerate() {
            writeln!(out, "List {}: {}", i + 1, l)?;
        }
    }

    let k = lists.len();
    let mut merged = SortedList::with_capacity(n);
    let mut ops = OpCount::new();
    merge_k_with(&mut merged, lists, &mut ops)?;

    if verbose {
        writeln!(out, "Merged: {}", merged)?;
    }
    writeln!(out, "({} lists, {} elements, {})", k, merged.len(), ops)?;
    Ok(())
}

impl Shell {
    pub fn new(cfg: Config) -> Self {
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            cfg,
            rng,
            tree: OsTree::new(),
        }
    }

    pub fn tree(&self) -> &OsTree {
        &self.tree
    }

    /// Runs one command line, writing its output to `out`.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            return Ok(Flow::Continue);
        };
        debug!(command = cmd, "execute");

        match cmd.to_uppercase().as_str() {
            "MERGE" => {
                let lists = parts
                    .enumerate()
                    .map(|(i, arg)| parse_list(arg, i + 1))
                    .collect::<Result<Vec<_>>>()?;
                if lists.is_empty() {
                    bail!("usage: MERGE a,b,c d,e ...");
                }
                merge_and_print(lists, true, out)?;
            }
            "RANDMERGE" => {
                let k: usize = parse_arg(parts.next(), "RANDMERGE k n")?;
                let n: usize = parse_arg(parts.next(), "RANDMERGE k n")?;
                check_generated(n)?;
                let lists = build_lists(&mut self.rng, k, n)?;
                merge_and_print(lists, n <= PRINT_LIMIT, out)?;
            }
            "BUILD" => {
                let n: usize = parse_arg(parts.next(), "BUILD n")?;
                check_generated(n)?;
                let max = n
                    .checked_mul(10)
                    .and_then(|max| i64::try_from(max.max(10)).ok())
                    .with_context(|| format!("cannot draw {} keys", n))?;
                let keys = sorted_unique_keys(&mut self.rng, n, max)?;
                self.tree = OsTree::build(&keys)?;
                self.print_tree_summary(out)?;
            }
            "LOAD" => {
                let keys = parts
                    .map(|s| s.parse::<i64>())
                    .collect::<Result<Vec<_>, _>>()
                    .context("usage: LOAD k1 k2 ...")?;
                self.tree = OsTree::build(&keys)?;
                self.print_tree_summary(out)?;
            }
            "SELECT" => {
                let rank: usize = parse_arg(parts.next(), "SELECT i")?;
                match self.tree.select(rank) {
                    Some(key) => writeln!(out, "{}", key)?,
                    None => writeln!(out, "(not found)")?,
                }
            }
            "DELETE" => {
                let rank: usize = match parts.next() {
                    Some(arg) => parse_arg(Some(arg), "DELETE [i]")?,
                    // an empty tree falls through to delete_by_rank's error
                    None => self.random_rank().unwrap_or(1),
                };
                let key = self.tree.delete_by_rank(rank)?;
                writeln!(out, "deleted {} (size {})", key, self.tree.len())?;
            }
            "SHOW" => write!(out, "{}", self.tree)?,
            "INORDER" => {
                if self.tree.is_empty() {
                    writeln!(out, "(empty)")?;
                } else {
                    let keys: Vec<String> = self.tree.iter().map(|k| k.to_string()).collect();
                    writeln!(out, "{}", keys.join(" "))?;
                }
            }
            "DEMO" => demo::run(&mut self.rng, out)?,
            "REPORT" => {
                let plan = match parts.next() {
                    Some(p) if p.eq_ignore_ascii_case("quick") => ReportPlan::quick(),
                    Some(other) => bail!("unknown report plan {:?}; usage: REPORT [quick]", other),
                    None => ReportPlan::full(),
                };
                let files =
                    write_reports(&self.cfg.report_dir, &plan, self.cfg.trials, &mut self.rng)?;
                writeln!(out, "wrote {}", files.merge_by_n.display())?;
                writeln!(out, "wrote {}", files.merge_by_k.display())?;
                writeln!(out, "wrote {}", files.ostree_delete.display())?;
            }
            "HELP" => writeln!(out, "{}", HELP)?,
            "EXIT" | "QUIT" => {
                writeln!(out, "bye")?;
                return Ok(Flow::Exit);
            }
            other => bail!("unknown command: {}", other),
        }
        Ok(Flow::Continue)
    }

    fn print_tree_summary<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "OK ({} keys, height {})",
            self.tree.len(),
            self.tree.height()
        )?;
        Ok(())
    }

    /// A fresh random rank into the current tree, if it has any keys.
    fn random_rank(&mut self) -> Option<usize> {
        (!self.tree.is_empty()).then(|| self.rng.gen_range(1..=self.tree.len()))
    }
}
