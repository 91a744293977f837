use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.report_dir, PathBuf::from("reports"));
    assert_eq!(cfg.seed, None);
    assert_eq!(cfg.trials, 5);
    assert_eq!(cfg.log_filter, "warn");
}

#[test]
fn reads_every_variable() {
    let cfg = Config::from_lookup(lookup(&[
        (REPORT_DIR_VAR, "/tmp/out"),
        (SEED_VAR, " 42 "),
        (TRIALS_VAR, "3"),
        (LOG_VAR, "debug,kmerge=trace"),
    ]))
    .unwrap();

    assert_eq!(cfg.report_dir, PathBuf::from("/tmp/out"));
    assert_eq!(cfg.seed, Some(42));
    assert_eq!(cfg.trials, 3);
    assert_eq!(cfg.log_filter, "debug,kmerge=trace");
}

#[test]
fn bad_seed_names_the_variable() {
    let err = Config::from_lookup(lookup(&[(SEED_VAR, "abc")])).unwrap_err();
    assert!(err.to_string().contains(SEED_VAR));
}

#[test]
fn zero_trials_rejected() {
    let err = Config::from_lookup(lookup(&[(TRIALS_VAR, "0")])).unwrap_err();
    assert!(err.to_string().contains("at least 1"));
}

#[test]
fn negative_trials_rejected() {
    assert!(Config::from_lookup(lookup(&[(TRIALS_VAR, "-2")])).is_err());
}
