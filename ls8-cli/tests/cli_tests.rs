//! Integration tests for the LS-8 CLI.
//!
//! These tests invoke the `ls8` binary as a subprocess and check
//! exit codes, stdout, and stderr.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn ls8() -> Command {
    Command::cargo_bin("ls8").unwrap()
}

/// Return the workspace root (parent of ls8-cli/).
fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .to_path_buf()
}

/// Return the absolute path to a sample program.
fn test_program(name: &str) -> PathBuf {
    workspace_root().join("tests/programs").join(name)
}

/// Write program text to a temp file and return its path.
fn write_program(dir: &TempDir, text: &str) -> PathBuf {
    let path = dir.path().join("prog.ls8");
    fs::write(&path, text).unwrap();
    path
}

// ---- Usage ----

#[test]
fn no_args_is_a_usage_error() {
    ls8()
        .env_remove("LS8_LOG")
        .assert()
        .failure()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Usage: ls8"));
}

#[test]
fn extra_positional_arg_is_a_usage_error() {
    ls8()
        .args([
            test_program("print8.ls8").to_str().unwrap(),
            "extra.ls8",
        ])
        .assert()
        .failure()
        .code(2)
        .stdout("");
}

#[test]
fn help_flag_exits_0() {
    ls8()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--trace"));
}

// ---- Run ----

#[test]
fn print8_prints_8() {
    ls8()
        .arg(test_program("print8.ls8"))
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn mult_prints_72() {
    ls8()
        .arg(test_program("mult.ls8"))
        .assert()
        .success()
        .stdout("72\n");
}

#[test]
fn stack_program() {
    ls8()
        .arg(test_program("stack.ls8"))
        .assert()
        .success()
        .stdout("2\n1\n");
}

#[test]
fn call_program() {
    ls8()
        .arg(test_program("call.ls8"))
        .assert()
        .success()
        .stdout("20\n30\n");
}

#[test]
fn sctest_program() {
    ls8()
        .arg(test_program("sctest.ls8"))
        .assert()
        .success()
        .stdout("1\n2\n");
}

#[test]
fn bad_opcode_is_a_runtime_error() {
    ls8()
        .arg(test_program("bad_opcode.ls8"))
        .assert()
        .failure()
        .code(3)
        .stdout("8\n")
        .stderr(predicate::str::contains("unknown opcode: 0xff"));
}

#[test]
fn stack_underflow_is_a_runtime_error() {
    let dir = TempDir::new().unwrap();
    let path = write_program(&dir, "01000110 # POP R0\n00000000\n00000001\n");
    ls8()
        .arg(&path)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("stack underflow"));
}

// ---- Load errors ----

#[test]
fn missing_file_exits_1() {
    ls8()
        .arg("/nonexistent/prog.ls8")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn malformed_literal_reports_line() {
    let dir = TempDir::new().unwrap();
    let path = write_program(&dir, "# comment\n10000010\n00002000\n");
    ls8()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "line 3: invalid binary literal '00002000'",
        ));
}

#[test]
fn literal_wider_than_a_byte_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_program(&dir, "100000001\n");
    ls8()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not fit in 8 bits"));
}

// ---- Trace / disassemble ----

#[test]
fn trace_goes_to_stderr() {
    ls8()
        .env_remove("LS8_LOG")
        .args(["--trace", test_program("print8.ls8").to_str().unwrap()])
        .assert()
        .success()
        .stdout("8\n")
        .stderr(predicate::str::contains(
            "00 | 82 00 08 | 00 00 00 00 00 00 00 FF | 00",
        ))
        .stderr(predicate::str::contains("03 | 47 00 01 |"))
        .stderr(predicate::str::contains("TRACE TRACE").not());
}

#[test]
fn no_trace_by_default() {
    ls8()
        .env_remove("LS8_LOG")
        .arg(test_program("print8.ls8"))
        .assert()
        .success()
        .stderr("");
}

#[test]
fn disassemble_prints_listing_without_running() {
    ls8()
        .args(["--disassemble", test_program("mult.ls8").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("10000010 # 00: LDI R0, 8"))
        .stdout(predicate::str::contains("10100010 # 06: MUL R0, R1"))
        .stdout(predicate::str::contains("00000001 # 0B: HLT"))
        .stdout(predicate::str::contains("72").not());
}
