/// End-to-end tests for the Algolab shell binary.
/// Tests cover: explicit merges, tree rank queries and deletes, reports, error lines
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::tempdir;

/// Helper to pipe commands into the CLI and capture stdout
fn run_cli_command(report_dir: &Path, commands: &str) -> String {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cli"))
        .env("ALGOLAB_SEED", "1234")
        .env("ALGOLAB_REPORT_DIR", report_dir)
        .env("ALGOLAB_TRIALS", "1")
        .env("ALGOLAB_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    {
        let stdin = child.stdin.as_mut().expect("Failed to open stdin");
        stdin
            .write_all(commands.as_bytes())
            .expect("Failed to write to stdin");
        stdin.write_all(b"EXIT\n").expect("Failed to write EXIT");
    }

    let output = child.wait_with_output().expect("Failed to read output");
    assert!(output.status.success(), "CLI exited with {}", output.status);
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_banner_and_exit() {
    let dir = tempdir().unwrap();
    let output = run_cli_command(dir.path(), "");

    assert!(output.contains("Algolab started (seed=1234"));
    assert!(output.contains("trials=1"));
    assert!(output.trim_end().ends_with("bye"));
}

#[test]
fn test_merge_three_lists() {
    let dir = tempdir().unwrap();
    let output = run_cli_command(dir.path(), "MERGE 1,4,7 2,3 5,6,8,9\n");

    assert!(output.contains("List 3: 5 6 8 9"));
    assert!(output.contains("Merged: 1 2 3 4 5 6 7 8 9"));
}

#[test]
fn test_merge_with_duplicates_and_single_list() {
    let dir = tempdir().unwrap();
    let output = run_cli_command(dir.path(), "MERGE 1,1,3 1,2\nMERGE 4,5,6\n");

    assert!(output.contains("Merged: 1 1 1 2 3"));
    assert!(output.contains("Merged: 4 5 6"));
}

#[test]
fn test_select_and_delete_by_rank() {
    let dir = tempdir().unwrap();
    let commands = "LOAD 10 20 30 40 50 60 70\nSELECT 4\nDELETE 4\nSELECT 4\nINORDER\n";
    let output = run_cli_command(dir.path(), commands);

    assert!(output.contains("OK (7 keys, height 3)"));
    assert!(output.contains("> 40\n"));
    assert!(output.contains("deleted 40 (size 6)"));
    assert!(output.contains("> 50\n"));
    assert!(output.contains("10 20 30 50 60 70"));
}

#[test]
fn test_show_prints_sizes() {
    let dir = tempdir().unwrap();
    let output = run_cli_command(dir.path(), "LOAD 1 2 3\nSHOW\n");

    assert!(output.contains("    (1,1)\n(2,3)\n    (3,1)\n"));
}

#[test]
fn test_errors_do_not_stop_the_shell() {
    let dir = tempdir().unwrap();
    let commands = "DELETE\nMERGE 3,1\nFROB\nLOAD 5\nSELECT 1\n";
    let output = run_cli_command(dir.path(), commands);

    assert_eq!(output.matches("ERR ").count(), 3);
    assert!(output.contains("ERR tree is empty"));
    assert!(output.contains("ERR unknown command: FROB"));
    assert!(output.contains("> 5\n"));
}

#[test]
fn test_random_merge_and_build() {
    let dir = tempdir().unwrap();
    let output = run_cli_command(dir.path(), "RANDMERGE 5 50\nBUILD 100\nDELETE\n");

    assert!(output.contains("(5 lists, 50 elements,"));
    assert!(output.contains("OK (100 keys, height 7)"));
    assert!(output.contains("(size 99)"));
}

#[test]
fn test_same_seed_is_reproducible() {
    let dir = tempdir().unwrap();
    let commands = "RANDMERGE 3 15\nBUILD 8\nSHOW\n";
    let a = run_cli_command(dir.path(), commands);
    let b = run_cli_command(dir.path(), commands);

    assert_eq!(a, b);
}

#[test]
fn test_quick_report() {
    let dir = tempdir().unwrap();
    let report_dir = dir.path().join("out");
    let output = run_cli_command(&report_dir, "REPORT quick\n");

    assert_eq!(output.matches("wrote ").count(), 3);
    for name in ["merge_by_n.csv", "merge_by_k.csv", "ostree_delete.csv"] {
        let body = std::fs::read_to_string(report_dir.join(name)).unwrap();
        assert!(body.lines().count() > 1, "{} has no rows", name);
    }
}

#[test]
fn test_demo() {
    let dir = tempdir().unwrap();
    let output = run_cli_command(dir.path(), "DEMO\n");

    assert!(output.contains("The merged list:"));
    assert!(output.contains("Tree built from 11 keys:"));
    assert!(!output.contains("ERR "));
}
