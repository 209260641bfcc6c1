//! Integration tests for top-level CLI behavior.

use std::path::Path;
use std::process::Command;

use regex::Regex;
use uuid::Uuid;

const BIN: &str = env!("CARGO_BIN_EXE_ta-uuidgen");

fn run_tool(bin: &Path, args: &[&str]) -> std::process::Output {
    // A freshly copied binary can briefly report ETXTBSY while another test forks.
    for _ in 0..10 {
        match Command::new(bin).args(args).output() {
            Err(err) if err.raw_os_error() == Some(26) => {
                std::thread::sleep(std::time::Duration::from_millis(50));
            }
            result => return result.expect("failed to run ta-uuidgen binary"),
        }
    }
    panic!("ta-uuidgen binary stayed busy");
}

fn run_uuidgen(args: &[&str]) -> std::process::Output {
    run_tool(Path::new(BIN), args)
}

fn canonical() -> Regex {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$").unwrap()
}

/// Pulls every `0x` literal out of the `#define` block, in order.
fn header_literals(header: &str) -> Vec<u64> {
    let define = header.find("#define").expect("header has a #define");
    Regex::new(r"0x([0-9a-f]+)")
        .unwrap()
        .captures_iter(&header[define..])
        .map(|caps| u64::from_str_radix(&caps[1], 16).unwrap())
        .collect()
}

fn uuid_from_literals(literals: &[u64]) -> Uuid {
    assert_eq!(literals.len(), 11, "expected 3 fields and 8 bytes: {literals:?}");
    let bytes: Vec<u8> = literals[3..].iter().map(|&b| u8::try_from(b).unwrap()).collect();
    Uuid::from_fields(
        u32::try_from(literals[0]).unwrap(),
        u16::try_from(literals[1]).unwrap(),
        u16::try_from(literals[2]).unwrap(),
        bytes.as_slice().try_into().unwrap(),
    )
}

#[test]
fn generate_then_verify_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().to_str().unwrap();

    let output = run_uuidgen(&["--out-dir", out_dir]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let printed = String::from_utf8_lossy(&output.stdout).trim().to_string();

    let build_var = std::fs::read_to_string(dir.path().join("uuid.mk")).unwrap();
    assert_eq!(build_var.lines().count(), 1);
    assert!(build_var.ends_with('\n'));
    let value = build_var.trim_end().strip_prefix("TA_UUID=").expect("TA_UUID assignment");
    assert!(canonical().is_match(value), "{value} is not a canonical v4 UUID");
    assert_eq!(value, printed);

    let header = std::fs::read_to_string(dir.path().join("uuid.h")).unwrap();
    assert!(header.lines().any(|line| line.trim() == "#pragma once"));
    assert!(header.contains("#define TA_UUID {"));
    let from_header = uuid_from_literals(&header_literals(&header));
    assert_eq!(from_header, Uuid::parse_str(value).unwrap());

    let verify = run_uuidgen(&["verify", "--out-dir", out_dir]);
    assert!(verify.status.success());
    assert_eq!(String::from_utf8_lossy(&verify.stdout).trim(), value);
}

#[test]
fn inner_byte_list_is_the_trailing_eight_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_uuidgen(&["--out-dir", dir.path().to_str().unwrap()]);
    assert!(output.status.success());

    let printed = Uuid::parse_str(String::from_utf8_lossy(&output.stdout).trim()).unwrap();
    let header = std::fs::read_to_string(dir.path().join("uuid.h")).unwrap();
    let bytes: Vec<u8> =
        header_literals(&header)[3..].iter().map(|&b| u8::try_from(b).unwrap()).collect();
    assert_eq!(bytes.as_slice(), &printed.as_bytes()[8..]);
}

#[test]
fn reruns_regenerate_and_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().to_str().unwrap();

    assert!(run_uuidgen(&["--out-dir", out_dir]).status.success());
    let first = std::fs::read_to_string(dir.path().join("uuid.mk")).unwrap();
    std::fs::write(dir.path().join("uuid.h"), "x".repeat(4096)).unwrap();

    assert!(run_uuidgen(&["--out-dir", out_dir]).status.success());
    let second = std::fs::read_to_string(dir.path().join("uuid.mk")).unwrap();
    assert_ne!(first, second);

    let header = std::fs::read_to_string(dir.path().join("uuid.h")).unwrap();
    assert!(header.starts_with("#pragma once"));
    assert!(!header.contains("xxx"));
    assert!(run_uuidgen(&["verify", "--out-dir", out_dir]).status.success());
}

#[test]
fn missing_output_dir_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("include");

    let output = run_uuidgen(&["--out-dir", out_dir.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("does not exist"));
    assert!(!out_dir.exists());
}

#[test]
fn defaults_to_include_beside_the_executable() {
    let dir = tempfile::tempdir().unwrap();
    let bin = dir.path().join("ta-uuidgen");
    std::fs::copy(BIN, &bin).unwrap();

    let missing = run_tool(&bin, &[]);
    assert!(!missing.status.success());

    std::fs::create_dir(dir.path().join("include")).unwrap();
    let output = run_tool(&bin, &[]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(dir.path().join("include/uuid.mk").exists());
    assert!(dir.path().join("include/uuid.h").exists());
}

#[test]
fn verify_rejects_tampered_header() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().to_str().unwrap();
    assert!(run_uuidgen(&["--out-dir", out_dir]).status.success());

    let header_path = dir.path().join("uuid.h");
    let header = std::fs::read_to_string(&header_path).unwrap();
    let tampered = header.replacen("  0x", "  0x1", 1);
    std::fs::write(&header_path, tampered).unwrap();

    let output = run_uuidgen(&["verify", "--out-dir", out_dir]);
    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
}

#[test]
fn generate_subcommand_accepts_record_flag() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().to_str().unwrap();
    let cassette = dir.path().join("ta.cassette.yaml");

    let output =
        run_uuidgen(&["generate", "--out-dir", out_dir, "--record", cassette.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(cassette.exists());

    let printed = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let verify = run_uuidgen(&["verify", "--out-dir", out_dir]);
    assert_eq!(String::from_utf8_lossy(&verify.stdout).trim(), printed);
}

#[test]
fn verify_rejects_cassette_flags() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_uuidgen(&["verify", "--out-dir", dir.path().to_str().unwrap(), "--replay", "x"]);
    assert!(!output.status.success());
}

#[test]
fn invalid_macro_name_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output =
        run_uuidgen(&["--out-dir", dir.path().to_str().unwrap(), "--macro-name", "not valid"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("invalid identifier name"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_uuidgen(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
