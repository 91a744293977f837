//! # CLI - Algolab interactive shell
//!
//! A REPL over the k-way merge and the order-statistics tree. Reads commands
//! from stdin, one per line, and prints results to stdout. Works both
//! interactively and scripted (pipe commands via stdin). Log output goes to
//! stderr.
//!
//! ## Commands
//!
//! ```text
//! MERGE a,b,c d,e ...   Merge explicit sorted lists
//! RANDMERGE k n         Merge k random lists holding n elements
//! BUILD n               Build a tree from n random distinct keys
//! LOAD k1 k2 ...        Build a tree from ascending keys
//! SELECT i              Print the i-th smallest key
//! DELETE [i]            Delete the i-th smallest key (random if omitted)
//! SHOW                  Print the tree as indented (key,size)
//! INORDER               Print the keys in order
//! DEMO                  Proof-of-correctness walkthrough
//! REPORT [quick]        Write CSV operation-count reports
//! EXIT / QUIT           Leave
//! ```
//!
//! ## Configuration
//!
//! ```text
//! ALGOLAB_REPORT_DIR  CSV report directory          (default: "reports")
//! ALGOLAB_SEED        RNG seed                      (default: random)
//! ALGOLAB_TRIALS      trials per tree report row    (default: 5)
//! ALGOLAB_LOG         tracing filter                (default: "warn")
//! ```
//!
//! ## Example
//!
//! ```text
//! $ cargo run -p cli
//! Algolab started (seed=random, reports=reports, trials=5)
//! > MERGE 1,4,7 2,3 5,6,8,9
//! List 1: 1 4 7
//! List 2: 2 3
//! List 3: 5 6 8 9
//! Merged: 1 2 3 4 5 6 7 8 9
//! (3 lists, 9 elements, ...)
//! > LOAD 10 20 30 40 50 60 70
//! OK (7 keys, height 3)
//! > SELECT 4
//! 40
//! > EXIT
//! bye
//! ```

mod demo;
mod gen;
mod report;
mod shell;

use anyhow::Result;
use config::Config;
use shell::{Flow, Shell};
use std::io::{self, BufRead, Write};
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .try_init();
}

fn main() -> Result<()> {
    let cfg = Config::from_env()?;
    init_logging(&cfg.log_filter);

    println!(
        "Algolab started (seed={}, reports={}, trials={})",
        cfg.seed
            .map_or_else(|| "random".to_string(), |s| s.to_string()),
        cfg.report_dir.display(),
        cfg.trials
    );
    println!("Type HELP for commands.");

    let mut shell = Shell::new(cfg);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("> ");
    stdout.flush().ok();

    for line in stdin.lock().lines() {
        let line = line?;
        match shell.execute(&line, &mut stdout) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => {
                warn!(command = %line, error = %e, "command failed");
                println!("ERR {:#}", e);
            }
        }

        print!("> ");
        stdout.flush().ok();
    }

    Ok(())
}
