//! Random inputs for the shell, the demo and the reports.

use anyhow::{ensure, Context, Result};
use rand::Rng;
use seqlist::SortedList;

/// `n` distinct keys drawn from `1..=max`, ascending.
pub fn sorted_unique_keys<R: Rng + ?Sized>(rng: &mut R, n: usize, max: i64) -> Result<Vec<i64>> {
    ensure!(
        max >= 0 && n as u64 <= max as u64,
        "cannot draw {} distinct keys from 1..={}",
        n,
        max
    );

    let mut keys: Vec<i64> = rand::seq::index::sample(rng, max as usize, n)
        .into_iter()
        .map(|i| i as i64 + 1)
        .collect();
    keys.sort_unstable();
    Ok(keys)
}

/// Splits `n` elements over `k` sorted lists.
///
/// Every list gets `n / k` elements and the first `n % k` lists one more.
/// Values within a list are distinct and drawn from `1..=5n/k` (widened
/// if a list would not fit), so lists overlap heavily.
pub fn build_lists<R: Rng + ?Sized>(rng: &mut R, k: usize, n: usize) -> Result<Vec<SortedList>> {
    ensure!(k >= 1, "need at least one list");
    ensure!(n >= k, "cannot fill {} non-empty lists with {} elements", k, n);

    let base = n / k;
    let extra = n % k;
    let max = n
        .checked_mul(5)
        .map(|spread| (spread / k).max(base + 1))
        .and_then(|max| i64::try_from(max).ok())
        .with_context(|| format!("{} elements is too many to draw values for", n))?;

    let mut lists = Vec::with_capacity(k);
    for i in 0..k {
        let len = base + usize::from(i < extra);
        let keys = sorted_unique_keys(rng, len, max)?;
        lists.push(SortedList::from_sorted(keys)?);
    }
    Ok(lists)
}
