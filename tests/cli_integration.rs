//! Integration tests for the `ct` CLI.
//!
//! Each test writes a document into a temp directory, runs `ct` as a
//! subprocess, and verifies stdout.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

const SAMPLE: &str = "// TODO: fix bug\nx=1\n// FIXME: handle null";

fn ct_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ct"))
}

/// Run `ct` in `dir` with the given args.
fn run_ct(dir: &Path, args: &[&str]) -> Output {
    Command::new(ct_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run ct")
}

/// Run `ct` in `dir`, feeding `stdin`.
fn run_ct_with_input(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(ct_bin())
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run ct");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn sample_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.ts"), SAMPLE).unwrap();
    tmp
}

// ============================================================================
// scan
// ============================================================================

#[test]
fn scan_lists_markers() {
    let tmp = sample_dir();
    let output = run_ct(tmp.path(), &["scan", "a.ts"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "a.ts:1: TODO fix bug\na.ts:3: FIXME handle null\n");
}

#[test]
fn scan_json() {
    let tmp = sample_dir();
    let output = run_ct(tmp.path(), &["scan", "a.ts", "--json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"file": "a.ts", "line": 1, "marker": "todo", "text": "fix bug"},
            {"file": "a.ts", "line": 3, "marker": "fixme", "text": "handle null"},
        ])
    );
}

#[test]
fn scan_without_document_is_empty() {
    let tmp = TempDir::new().unwrap();
    let output = run_ct(tmp.path(), &["scan", "--json"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "[]");
}

#[test]
fn scan_unreadable_file_fails() {
    let tmp = TempDir::new().unwrap();
    let output = run_ct(tmp.path(), &["scan", "missing.ts"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: could not read missing.ts"));
}

// ============================================================================
// render
// ============================================================================

#[test]
fn render_without_document_shows_placeholder() {
    let tmp = TempDir::new().unwrap();
    let output = run_ct(tmp.path(), &["render"]);
    assert!(output.status.success());
    let html = stdout(&output);
    assert!(html.contains("No tasks found."));
    assert!(html.contains("Completed tasks: 0"));
}

#[test]
fn render_uses_config_title() {
    let tmp = sample_dir();
    fs::write(
        tmp.path().join("codetasks.toml"),
        "[panel]\ntitle = \"Sprint Board\"\n",
    )
    .unwrap();
    let output = run_ct(tmp.path(), &["render", "a.ts"]);
    assert!(output.status.success());
    let html = stdout(&output);
    assert!(html.contains("<h2>Sprint Board</h2>"));
    assert!(html.contains("(Line 3): handle null"));
}

#[test]
fn malformed_config_fails() {
    let tmp = sample_dir();
    fs::write(tmp.path().join("codetasks.toml"), "[panel\n").unwrap();
    let output = run_ct(tmp.path(), &["render", "a.ts"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not parse"));
}

#[test]
fn scan_ignores_malformed_config() {
    let tmp = sample_dir();
    fs::write(tmp.path().join("codetasks.toml"), "[panel\n").unwrap();
    let output = run_ct(tmp.path(), &["scan", "a.ts"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("a.ts:1: TODO fix bug"));
}

#[test]
fn json_flag_belongs_to_scan() {
    let tmp = sample_dir();
    let output = run_ct(tmp.path(), &["render", "a.ts", "--json"]);
    assert!(!output.status.success());
}

// ============================================================================
// serve
// ============================================================================

#[test]
fn serve_session_round() {
    let tmp = sample_dir();
    let input = "\
{\"command\":\"complete\",\"file\":\"a.ts\",\"line\":1}
{\"command\":\"unknown\",\"file\":\"a.ts\",\"line\":3}
{\"command\":\"goTo\",\"file\":\"a.ts\",\"line\":3}
{\"command\":\"goTo\",\"file\":\"gone.ts\",\"line\":3}
{\"command\":\"complete\",\"file\":\"a.ts\",\"line\":999}
";
    let output = run_ct_with_input(tmp.path(), &["serve", "a.ts"], input);
    assert!(output.status.success());

    let events: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let kinds: Vec<&str> = events.iter().map(|e| e["event"].as_str().unwrap()).collect();
    assert_eq!(kinds, vec!["render", "render", "reveal", "render"]);

    let after_complete = events[1]["html"].as_str().unwrap();
    assert!(after_complete.contains("Completed tasks: 1"));
    assert!(!after_complete.contains("fix bug"));

    assert_eq!(events[2]["file"], "a.ts");
    assert_eq!(events[2]["line"], 2);

    let last = events[3]["html"].as_str().unwrap();
    assert!(last.contains("Completed tasks: 2"));
    assert!(last.contains("handle null"));
}

// ============================================================================
// usage
// ============================================================================

#[test]
fn no_subcommand_prints_help() {
    let tmp = TempDir::new().unwrap();
    let output = run_ct(tmp.path(), &[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("scan"));
}
