//! CLI integration tests for the `sectargs` binary.
//!
//! Uses `assert_cmd` to spawn the binary inside a temp directory holding the
//! argument files, and checks exit codes, stdout and stderr.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Temp directory pre-populated with the fixtures used below.
fn fixtures() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("args.txt"), "--a 1\n--b 2\n").unwrap();
    fs::write(
        dir.path().join("conf.txt"),
        "# shared\n--x 1\n@s1 --y 2\n@s2 --z 3  # trailing\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("conf.json"),
        r#"{"--x": 1, "@gpu": {"--device": "cuda"}, "@cpu": {"--device": "cpu"}}"#,
    )
    .unwrap();
    fs::write(dir.path().join("inner.txt"), "--z 9\n").unwrap();
    fs::write(dir.path().join("outer.txt"), "--first @inner.txt --last\n").unwrap();
    dir
}

fn sectargs(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("sectargs");
    cmd.current_dir(dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_lines(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .lines()
        .map(str::to_string)
        .collect()
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    let dir = fixtures();
    sectargs(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expand argument files"));
}

#[test]
fn version_exits_0() {
    let dir = fixtures();
    sectargs(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sectargs"));
}

// ──────────────────────────────────────────────
// 2. expand
// ──────────────────────────────────────────────

#[test]
fn expand_plain_file() {
    let dir = fixtures();
    let out = sectargs(&dir)
        .args(["expand", "--", "prog", "@args.txt", "--c"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(
        stdout_lines(&out),
        vec!["prog", "--a", "1", "--b", "2", "--c"]
    );
}

#[test]
fn expand_selected_section() {
    let dir = fixtures();
    let out = sectargs(&dir)
        .args(["expand", "@conf.txt@s2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(stdout_lines(&out), vec!["--x", "1", "--z", "3"]);
}

#[test]
fn expand_json_sections() {
    let dir = fixtures();
    let out = sectargs(&dir)
        .args(["expand", "@conf.json@cpu"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(stdout_lines(&out), vec!["--x", "1", "--device", "cpu"]);
}

#[test]
fn expand_json_output_is_an_array() {
    let dir = fixtures();
    let out = sectargs(&dir)
        .args(["--output", "json", "expand", "@conf.txt@s1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value, serde_json::json!(["--x", "1", "--y", "2"]));
}

#[test]
fn expand_nested_reference_with_flat_format() {
    let dir = fixtures();
    let out = sectargs(&dir)
        .args(["expand", "--format", "flat", "@outer.txt"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(stdout_lines(&out), vec!["--first", "--z", "9", "--last"]);
}

#[test]
fn expand_missing_section_exits_1() {
    let dir = fixtures();
    sectargs(&dir)
        .args(["expand", "@conf.txt@s3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("'s3'"))
        .stderr(predicate::str::contains("conf.txt"));
}

#[test]
fn expand_missing_file_exits_1() {
    let dir = fixtures();
    sectargs(&dir)
        .args(["expand", "@absent.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("absent.txt"));
}

#[test]
fn expand_error_as_json() {
    let dir = fixtures();
    let out = sectargs(&dir)
        .args(["--output", "json", "expand", "@conf.txt@s3@s4"])
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["kind"], "missing_section");
    assert_eq!(value["sections"], serde_json::json!(["s3", "s4"]));
    assert_eq!(value["reference"], "@conf.txt@s3@s4");
}

#[test]
fn quiet_suppresses_text_errors() {
    let dir = fixtures();
    sectargs(&dir)
        .args(["--quiet", "expand", "@conf.txt@s3"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::is_empty());
}

#[test]
fn verbose_logs_file_reads() {
    let dir = fixtures();
    sectargs(&dir)
        .args(["--verbose", "expand", "@args.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("reading arguments from file"));
}

#[test]
fn verbose_logs_resolver_settings_and_error_kind() {
    let dir = fixtures();
    sectargs(&dir)
        .args(["--verbose", "expand", "--trigger", "%", "--format", "text", "@conf.txt%s9"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("expanding arguments"))
        .stderr(predicate::str::contains("\"text\""))
        .stderr(predicate::str::contains("missing_section"));
}

#[test]
fn custom_prefix_chars() {
    let dir = fixtures();
    let out = sectargs(&dir)
        .args(["expand", "--prefix-chars", "+", "--", "@kept", "+args.txt"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(stdout_lines(&out), vec!["@kept", "--a", "1", "--b", "2"]);
}

// ──────────────────────────────────────────────
// 3. sections
// ──────────────────────────────────────────────

#[test]
fn sections_lists_text_headers() {
    let dir = fixtures();
    let out = sectargs(&dir)
        .args(["sections", "conf.txt"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(stdout_lines(&out), vec!["s1", "s2"]);
}

#[test]
fn sections_lists_json_keys() {
    let dir = fixtures();
    let out = sectargs(&dir)
        .args(["--output", "json", "sections", "conf.json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value, serde_json::json!(["gpu", "cpu"]));
}

#[test]
fn sections_of_missing_file_exits_1() {
    let dir = fixtures();
    sectargs(&dir)
        .args(["sections", "absent.txt"])
        .assert()
        .failure()
        .code(1);
}
