use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a nail command
fn nail_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("nail"))
}

const SINGLE_PAIR: [u8; 8] = [0x4E, 0x41, 0x49, 0x4C, 0x64, 0x00, 0xC8, 0x00];

#[test]
fn test_help() {
    nail_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("NAIL pin position files"));
}

#[test]
fn test_version() {
    nail_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("nail"));
}

#[test]
fn test_read_prints_points() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pins.nail");
    fs::write(&path, SINGLE_PAIR).unwrap();

    nail_cmd()
        .arg("read")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("read() returned 100"))
        .stdout(predicate::str::contains("X: 0.050000"))
        .stdout(predicate::str::contains("Y: 0.100000"))
        .stdout(predicate::str::contains("Total Nails: 1"));
}

#[test]
fn test_read_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pins.nail");
    fs::write(&path, SINGLE_PAIR).unwrap();

    let output = nail_cmd()
        .arg("read")
        .arg(&path)
        .arg("--json")
        .arg("--raw")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], 100);
    assert_eq!(value["count"], 1);
    assert_eq!(value["raw"]["singles"][0][0], 100);
    assert_eq!(value["raw"]["singles"][0][1], 200);
}

#[test]
fn test_read_invalid_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.nail");
    fs::write(&path, b"LIAN\x00\x00\x00\x00").unwrap();

    nail_cmd()
        .arg("read")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid NAIL file"));
}

#[test]
fn test_read_strict_rejects_trailing_bytes() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("odd.nail");
    let mut data = SINGLE_PAIR.to_vec();
    data.push(0x01);
    fs::write(&path, &data).unwrap();

    nail_cmd().arg("read").arg(&path).assert().success();

    nail_cmd()
        .arg("read")
        .arg(&path)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Truncated"));
}

#[test]
fn test_write_from_json() {
    let temp = TempDir::new().unwrap();
    let json_path = temp.path().join("points.json");
    let out_path = temp.path().join("out.nail");
    fs::write(&json_path, r#"[{"x": 0.05, "y": 0.1}]"#).unwrap();

    nail_cmd()
        .arg("write")
        .arg(&json_path)
        .arg("-o")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 nails"));

    assert_eq!(fs::read(&out_path).unwrap(), SINGLE_PAIR);
}

#[test]
fn test_write_from_stdin() {
    let temp = TempDir::new().unwrap();
    let out_path = temp.path().join("out.nail");

    nail_cmd()
        .arg("write")
        .arg("-")
        .arg("-o")
        .arg(&out_path)
        .write_stdin("[]")
        .assert()
        .success();

    assert_eq!(fs::read(&out_path).unwrap(), b"NAIL");
}

#[test]
fn test_convert_default_output() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pins.nail");
    fs::write(&path, SINGLE_PAIR).unwrap();

    nail_cmd()
        .arg("convert")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Written"));

    let custom = temp.path().join("pins.nail_custom");
    assert_eq!(fs::read(custom).unwrap(), SINGLE_PAIR);
}

#[test]
fn test_validate() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pins.nail");
    fs::write(&path, SINGLE_PAIR).unwrap();

    nail_cmd()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("VALID"));

    let bad = temp.path().join("bad.nail");
    fs::write(&bad, b"XX").unwrap();
    nail_cmd()
        .arg("validate")
        .arg(&bad)
        .assert()
        .failure()
        .stdout(predicate::str::contains("INVALID"));
}

#[test]
fn test_validate_invalid_level() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pins.nail");
    fs::write(&path, SINGLE_PAIR).unwrap();

    nail_cmd()
        .arg("validate")
        .arg(&path)
        .arg("--level")
        .arg("paranoid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid validation level"));
}
