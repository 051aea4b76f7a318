//! Shared helpers for CLI integration tests.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run the rawline binary with `args`, feeding `input` to stdin, and
/// capture output.
///
/// Stdin is a pipe rather than a terminal, so raw mode is skipped and
/// the session reads the bytes exactly as written. Closing the pipe
/// ends the session.
pub fn run_repl(args: &[&str], input: &[u8]) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rawline"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn rawline");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input)
        .expect("Failed to write to stdin");

    let output = child
        .wait_with_output()
        .expect("Failed to wait for rawline");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
