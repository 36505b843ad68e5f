use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const CLEAN: &str = "@fragment\nfn main() -> @location(0) vec4f {\n    return vec4f(1.0);\n}\n";

#[test]
fn check_clean_file_succeeds() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("clean.wgsl");
    fs::write(&path, CLEAN).expect("write shader");

    Command::cargo_bin("wgsl-check")
        .expect("binary exists")
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn check_reports_errors_and_fails() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.wgsl");
    fs::write(&path, "var x: i32\n").expect("write shader");

    Command::cargo_bin("wgsl-check")
        .expect("binary exists")
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "broken.wgsl:1:10: error: Missing semicolon at end of statement [missing-semicolon]",
        ));
}

#[test]
fn check_warnings_only_succeeds() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("big.wgsl");
    fs::write(&path, "@compute @workgroup_size(16, 16, 2)\nfn main() {}\n").expect("write shader");

    Command::cargo_bin("wgsl-check")
        .expect("binary exists")
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("warning: Total workgroup invocations (512)"));
}

#[test]
fn check_walks_directories_for_wgsl_files() {
    let dir = tempdir().expect("tempdir");
    let nested = dir.path().join("shaders").join("nested");
    fs::create_dir_all(&nested).expect("create dirs");
    fs::write(nested.join("a.wgsl"), "fn test() {").expect("write shader");
    fs::write(dir.path().join("notes.txt"), "fn test() {").expect("write notes");

    Command::cargo_bin("wgsl-check")
        .expect("binary exists")
        .arg("check")
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("a.wgsl:1:11: error: Unclosed '{' [delimiters]"))
        .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn check_honors_config() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.wgsl");
    fs::write(&path, "var x: i32\n").expect("write shader");
    let config = dir.path().join("wgsl-check.toml");
    fs::write(&config, "disabled-rules = [\"missing-semicolon\"]\n").expect("write config");

    Command::cargo_bin("wgsl-check")
        .expect("binary exists")
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn check_rejects_bad_config() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("clean.wgsl");
    fs::write(&path, CLEAN).expect("write shader");
    let config = dir.path().join("bad.toml");
    fs::write(&config, "disabled-rules = [\"no-such-rule\"]\n").expect("write config");

    Command::cargo_bin("wgsl-check")
        .expect("binary exists")
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn check_missing_file_fails() {
    let dir = tempdir().expect("tempdir");
    Command::cargo_bin("wgsl-check")
        .expect("binary exists")
        .arg("check")
        .arg(dir.path().join("missing.wgsl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn highlight_prints_spans() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("one.wgsl");
    fs::write(&path, "let x: f32 = 1.0; // one").expect("write shader");

    Command::cargo_bin("wgsl-check")
        .expect("binary exists")
        .arg("highlight")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1:19+6 wgsl.comment #57a64a \"// one\""))
        .stdout(predicate::str::contains("1:1+3 wgsl.keyword #569cd6 \"let\""))
        .stdout(predicate::str::contains("1:8+3 wgsl.type #4ec9b0 \"f32\""));
}
