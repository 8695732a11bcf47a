//! Integration tests for command mode

use std::process::Command;

fn run_command(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_gridref"))
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn test_column_letters() {
    let (stdout, _, code) = run_command(&["column", "26"]);
    assert_eq!(stdout.trim(), "AA");
    assert_eq!(code, 0);

    let (stdout, _, code) = run_command(&["column", "ZZZ"]);
    assert_eq!(stdout.trim(), "18277");
    assert_eq!(code, 0);
}

#[test]
fn test_cell_coordinates() {
    let (stdout, _, code) = run_command(&["cell", "$B$12"]);
    assert_eq!(stdout.trim(), "11 1");
    assert_eq!(code, 0);
}

#[test]
fn test_anchor() {
    let (stdout, _, code) = run_command(&["anchor", "B$12"]);
    assert_eq!(stdout.trim(), "11 1 AbsoluteRow");
    assert_eq!(code, 0);
}

#[test]
fn test_offset_with_negative_deltas() {
    let (stdout, _, code) = run_command(&["offset", "C3", "-1", "-2"]);
    assert_eq!(stdout.trim(), "A2");
    assert_eq!(code, 0);
}

#[test]
fn test_offset_off_the_grid() {
    let (stdout, stderr, code) = run_command(&["offset", "A1", "0", "-1"]);
    assert!(stdout.is_empty());
    assert!(stderr.contains("A1"));
    assert_eq!(code, 1);
}

#[test]
fn test_reversed_range_pipeline() {
    let (stdout, _, code) = run_command(&["normalize", "D4:B2"]);
    assert_eq!(stdout.trim(), "B2:D4");
    assert_eq!(code, 0);

    let (stdout, _, code) = run_command(&["size", "B2:D4"]);
    assert_eq!(stdout.trim(), "3 3 9");
    assert_eq!(code, 0);

    let (stdout, _, code) = run_command(&["expand", "B2:D4"]);
    assert_eq!(stdout.trim(), "B2\nC2\nD2\nB3\nC3\nD3\nB4\nC4\nD4");
    assert_eq!(code, 0);
}

#[test]
fn test_expand_over_limit() {
    let (stdout, stderr, code) = run_command(&["--max-cells", "8", "expand", "B2:D4"]);
    assert!(stdout.is_empty());
    assert!(stderr.contains("limit is 8"));
    assert_eq!(code, 1);
}

#[test]
fn test_contains_and_intersect() {
    let (stdout, _, _) = run_command(&["contains", "C3", "B2:D4"]);
    assert_eq!(stdout.trim(), "TRUE");
    let (stdout, _, _) = run_command(&["contains", "A1", "B2:D4"]);
    assert_eq!(stdout.trim(), "FALSE");

    let (stdout, _, code) = run_command(&["intersect", "A1:C3", "B2:D4"]);
    assert_eq!(stdout.trim(), "B2:C3");
    assert_eq!(code, 0);

    let (stdout, _, code) = run_command(&["intersect", "A1:B2", "D4:E5"]);
    assert_eq!(stdout.trim(), "NONE");
    assert_eq!(code, 0);
}

#[test]
fn test_invalid_reference_reports_input() {
    let (_, stderr, code) = run_command(&["cell", "1A"]);
    assert!(stderr.contains("Invalid cell reference: 1A"));
    assert_eq!(code, 1);

    let (_, stderr, code) = run_command(&["normalize", "A1"]);
    assert!(stderr.contains("Invalid range: A1"));
    assert_eq!(code, 1);
}

#[test]
fn test_missing_command() {
    let (_, stderr, code) = run_command(&[]);
    assert!(stderr.contains("No command given"));
    assert_eq!(code, 1);
}

#[test]
fn test_help() {
    for flag in ["-h", "--help"] {
        let (stdout, stderr, code) = run_command(&[flag]);
        assert!(stdout.is_empty());
        assert!(stderr.contains("Usage: gridref"));
        assert!(stderr.contains("--max-cells"));
        assert_eq!(code, 0);
    }
}

#[test]
fn test_max_cells_without_value() {
    let (stdout, stderr, code) = run_command(&["--max-cells"]);
    assert!(stdout.is_empty());
    assert!(stderr.contains("--max-cells requires a value"));
    assert_eq!(code, 1);
}

#[test]
fn test_max_cells_not_a_number() {
    let (stdout, stderr, code) = run_command(&["--max-cells", "abc", "expand", "A1:B2"]);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Not a number: abc"));
    assert_eq!(code, 1);
}

#[test]
fn test_max_cells_after_command() {
    let (stdout, _, code) = run_command(&["expand", "A1:B1", "--max-cells", "2"]);
    assert_eq!(stdout.trim(), "A1\nB1");
    assert_eq!(code, 0);
}

#[test]
fn test_unknown_leading_option() {
    let (stdout, stderr, code) = run_command(&["--bogus", "cell", "A1"]);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Unknown option: --bogus"));
    assert!(stderr.contains("Usage: gridref"));
    assert_eq!(code, 1);
}

#[test]
fn test_negative_offset_after_command_is_an_argument() {
    let (stdout, stderr, code) = run_command(&["offset", "B2", "-1", "0"]);
    assert_eq!(stdout.trim(), "B1");
    assert!(!stderr.contains("Unknown option"));
    assert_eq!(code, 0);

    let (_, stderr, code) = run_command(&["offset", "B2", "-2", "0"]);
    assert!(stderr.contains("leaves the grid"));
    assert_eq!(code, 1);
}
