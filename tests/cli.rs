//! End-to-end tests for the `geno` binary.

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

// =============================================================================
// Helper functions
// =============================================================================

fn create_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

fn run_geno(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_geno"))
        .args(args)
        .output()
        .expect("Failed to run geno")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn path(file: &NamedTempFile) -> &str {
    file.path().to_str().unwrap()
}

// =============================================================================
// Successful runs
// =============================================================================

#[test]
fn test_overlap_prints_integer() {
    let a = create_file("1 2\n3 6\n");
    let b = create_file("0 1\n1 5\n");
    let output = run_geno(&["overlap", "-a", path(&a), "-b", path(&b)]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "3\n");
}

#[test]
fn test_correlation_prints_shortest_float() {
    let a = create_file("10\n11\n12\n13\n14\n15\n16\n");
    let b = create_file("10.5\n11.5\n12.0\n13.0\n13.5\n15.0\n14.0\n");
    let output = run_geno(&["correlation", "-a", path(&a), "-b", path(&b)]);

    assert!(output.status.success());
    let r: f64 = stdout(&output).trim().parse().unwrap();
    assert!((r - 0.9452853306994897).abs() < 1e-9);
}

#[test]
fn test_mean_with_precision() {
    let s = create_file("1 2\n3 6\n");
    let f = create_file("10.5\n11.5\n12.0\n13.0\n13.5\n15.0\n14.0\n");
    let output = run_geno(&["mean", "-s", path(&s), "-f", path(&f), "-p", "2"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "13.25\n");
}

#[test]
fn test_stats_go_to_stderr() {
    let s = create_file("1 2\n3 6\n");
    let f = create_file("10.5\n11.5\n12.0\n13.0\n13.5\n15.0\n14.0\n");
    let output = run_geno(&["mean", "-s", path(&s), "-f", path(&f), "--stats"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "13.25\n");
    assert!(stderr(&output).contains("Covered: 4"));
}

// =============================================================================
// Error handling
// =============================================================================

#[test]
fn test_malformed_segment_line_fails() {
    let bad = create_file("0 1 2\n");
    let ok = create_file("5 6\n");
    let output = run_geno(&["overlap", "-a", path(&bad), "-b", path(&ok)]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Invalid line format"));
    assert!(stderr(&output).contains("0 1 2"));
}

#[test]
fn test_length_mismatch_fails() {
    let a = create_file("1\n2\n3\n");
    let b = create_file("1\n2\n3\n4\n");
    let output = run_geno(&["correlation", "-a", path(&a), "-b", path(&b)]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("same size"));
}

#[test]
fn test_no_coverage_fails() {
    let s = create_file("10 11\n");
    let f = create_file("1\n2\n3\n");
    let output = run_geno(&["mean", "-s", path(&s), "-f", path(&f)]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error: No function values"));
}
