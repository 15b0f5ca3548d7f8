//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// The rise-then-fall sequence the search was first validated against.
pub const SCENARIO: [i32; 9] = [1, 2, 3, 4, 7, 8, 9, 3, 1];

/// Build a `summit` invocation isolated from the user's environment: `HOME`
/// points at `home` so no real config is read, and overrides are cleared.
pub fn summit(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_summit"));
    cmd.env("HOME", home)
        .env_remove("SUMMIT_STRATEGY")
        .env_remove("SUMMIT_PRECONDITION")
        .env_remove("RUST_LOG");
    cmd
}

/// Run `cmd` with `stdin` piped in.
pub fn run_with_stdin(cmd: &mut Command, stdin: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn summit");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for summit")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
