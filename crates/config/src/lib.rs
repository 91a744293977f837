//! # Config - environment-driven settings
//!
//! All settings come from environment variables with defaults:
//!
//! ```text
//! ALGOLAB_REPORT_DIR  CSV report directory          (default: "reports")
//! ALGOLAB_SEED        RNG seed                      (default: unset = entropy)
//! ALGOLAB_TRIALS      trials per tree report row    (default: 5)
//! ALGOLAB_LOG         tracing filter                (default: "warn")
//! ```

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

pub const REPORT_DIR_VAR: &str = "ALGOLAB_REPORT_DIR";
pub const SEED_VAR: &str = "ALGOLAB_SEED";
pub const TRIALS_VAR: &str = "ALGOLAB_TRIALS";
pub const LOG_VAR: &str = "ALGOLAB_LOG";

pub const DEFAULT_REPORT_DIR: &str = "reports";
pub const DEFAULT_TRIALS: usize = 5;
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where `REPORT` writes its CSV files.
    pub report_dir: PathBuf,
    /// Fixed seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// How many trials each tree report row is averaged over.
    pub trials: usize,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_dir: PathBuf::from(DEFAULT_REPORT_DIR),
            seed: None,
            trials: DEFAULT_TRIALS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, so callers (and tests) can supply
    /// values without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(dir) = lookup(REPORT_DIR_VAR) {
            cfg.report_dir = PathBuf::from(dir);
        }

        if let Some(seed) = lookup(SEED_VAR) {
            let seed = seed
                .trim()
                .parse()
                .with_context(|| format!("{} must be an unsigned integer, got {:?}", SEED_VAR, seed))?;
            cfg.seed = Some(seed);
        }

        if let Some(trials) = lookup(TRIALS_VAR) {
            let trials: usize = trials
                .trim()
                .parse()
                .with_context(|| format!("{} must be a positive integer, got {:?}", TRIALS_VAR, trials))?;
            if trials == 0 {
                bail!("{} must be at least 1", TRIALS_VAR);
            }
            cfg.trials = trials;
        }

        if let Some(filter) = lookup(LOG_VAR) {
            cfg.log_filter = filter;
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests;
