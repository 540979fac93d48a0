//! End-to-end tests for the whamo-diagram binary
//!
//! Run all tests with: cargo test

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

const MODEL: &str = r#"{
    "nodes": [
        {"id": "1", "type": "reservoir", "position": {"x": 100, "y": 100},
         "data": {"label": "Upper", "nodeNumber": 1, "elevation": 250}},
        {"id": "2", "type": "junction", "position": {"x": 300, "y": 100}, "data": {}}
    ],
    "edges": [{"source": "1", "target": "2", "data": {"label": "C1"}}]
}"#;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_whamo-diagram"))
}

/// Run the binary with `args`, feeding `stdin` to it
fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = bin()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start whamo-diagram");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write model to stdin");
    child.wait_with_output().expect("failed to wait for whamo-diagram")
}

#[test]
fn test_stdin_dash_to_stdout() {
    let output = run_with_stdin(&["-"], MODEL);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let html = String::from_utf8(output.stdout).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(">Upper</text>"));
    assert!(html.contains(">C1</text>"));
    assert!(html.contains(">Elev: 250</text>"));
}

#[test]
fn test_output_file_and_title() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("model.json");
    let out = dir.path().join("diagram.html");
    fs::write(&input, MODEL).unwrap();

    let output = bin()
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .args(["--title", "Plant A"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("<title>Plant A</title>"));
    assert!(html.contains(r#"<line x1="100" y1="100" x2="300" y2="100""#));
}

#[test]
fn test_missing_input_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.json");

    let output = bin().arg(&missing).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does-not-exist.json"), "stderr: {}", stderr);
}

#[test]
fn test_malformed_json_exits_with_error() {
    let output = run_with_stdin(&[], "{not json");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
