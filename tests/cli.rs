//! CLI integration tests for g8cu
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn g8cu() -> Command {
    Command::cargo_bin("g8cu").unwrap()
}

fn le_bytes(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    g8cu()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Group-varint"));
}

#[test]
fn test_version() {
    g8cu()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("g8cu"));
}

#[test]
fn test_list_codecs() {
    g8cu()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("copy"))
        .stdout(predicate::str::contains("g8cu_fast"))
        .stdout(predicate::str::contains("g8cu_nib"))
        .stdout(predicate::str::contains("raw after 0xF0"));
}

#[test]
fn test_config_show() {
    g8cu()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[codec]"))
        .stdout(predicate::str::contains("[simd]"));
}

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn test_encode_text_raw_block() {
    let output = g8cu()
        .args(["encode", "--codec", "g8cu", "--text"])
        .write_stdin("1 2 3 4")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(output, vec![0xFF, 1, 2, 3, 4]);
}

#[test]
fn test_encode_binary_input() {
    let output = g8cu()
        .args(["encode", "-c", "g8cu_fp"])
        .write_stdin(le_bytes(&[300, 5]))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(output, vec![0x01, 0x2C, 0x01, 5]);
}

#[test]
fn test_encode_rejects_bad_text() {
    g8cu()
        .args(["encode", "--text"])
        .write_stdin("12 abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid integer 'abc'"));
}

#[test]
fn test_encode_rejects_ragged_binary() {
    g8cu()
        .args(["encode", "-c", "g8cu"])
        .write_stdin(vec![1u8, 2, 3, 4, 5])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid length 5"));
}

#[test]
fn test_unknown_codec_suggests() {
    g8cu()
        .args(["encode", "--codec", "g8cu_fats", "--text"])
        .write_stdin("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("codec 'g8cu_fats' not found"))
        .stderr(predicate::str::contains("did you mean 'g8cu_fast'?"));
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn test_decode_text_output() {
    g8cu()
        .args(["decode", "--codec", "g8cu", "--count", "4", "--text"])
        .write_stdin(vec![0xFFu8, 1, 2, 3, 4])
        .assert()
        .success()
        .stdout("1\n2\n3\n4\n");
}

#[test]
fn test_decode_requires_count() {
    g8cu()
        .args(["decode", "--codec", "g8cu"])
        .write_stdin(vec![0xFFu8, 1, 2, 3, 4])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--count"));
}

#[test]
fn test_decode_truncated_stream() {
    g8cu()
        .args(["decode", "--codec", "g8cu_nib", "--count", "2", "--text"])
        .write_stdin(vec![0x33u8, 1, 2])
        .assert()
        .failure()
        .stderr(predicate::str::contains("truncated input"));
}

#[test]
fn test_round_trip_every_codec() {
    let text = "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 70000 4294967295\n";
    for codec in ["copy", "g8cu", "g8cu_fast", "g8cu_fp", "g8cu_nib"] {
        let encoded = g8cu()
            .args(["encode", "--codec", codec, "--text"])
            .write_stdin(text)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let expected: String = text.split_whitespace().map(|t| format!("{}\n", t)).collect();
        g8cu()
            .args(["decode", "--codec", codec, "--count", "20", "--text"])
            .write_stdin(encoded)
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn test_round_trip_scalar_delta() {
    let encoded = g8cu()
        .args(["--scalar", "encode", "-c", "g8cu_nib", "--text", "--delta"])
        .write_stdin("100 101 105 4000")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    g8cu()
        .args(["--scalar", "decode", "-c", "g8cu_nib", "-n", "4", "--text", "--delta"])
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout("100\n101\n105\n4000\n");
}

// ============================================================================
// Stats
// ============================================================================

#[test]
fn test_stats_reports_every_codec() {
    g8cu()
        .args(["stats", "--text"])
        .write_stdin("1 2 3 4 300 70000")
        .assert()
        .success()
        .stdout(predicate::str::contains("6 values"))
        .stdout(predicate::str::contains("g8cu_fp"))
        .stdout(predicate::str::contains("copy"))
        .stdout(predicate::str::contains("MISMATCH").not());
}

#[test]
fn test_stats_selected_codecs() {
    g8cu()
        .args(["stats", "--text", "--codecs", "g8cu,copy"])
        .write_stdin("1 2 3 4")
        .assert()
        .success()
        .stdout(predicate::str::contains("g8cu"))
        .stdout(predicate::str::contains("g8cu_nib").not());
}
