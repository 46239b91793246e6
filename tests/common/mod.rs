//! Shared test helpers for integration tests

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::path::Path;

/// Helper to get a tablesmith command with colours off
pub fn tablesmith() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("tablesmith"));
    cmd.arg("--no-color");
    cmd
}

/// Run a script of session commands in `dir`, returning stdout
pub fn run_script(dir: &Path, script: &str) -> String {
    let output = tablesmith()
        .current_dir(dir)
        .write_stdin(script)
        .output()
        .unwrap();
    assert!(output.status.success(), "session failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap()
}
