//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use argsplit::Arguments;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Classify a literal invocation; the first token is the command name.
pub fn classify(tokens: &[&str]) -> Arguments {
    Arguments::from_invocation(tokens.iter().copied()).expect("non-empty invocation")
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// The `argsplit` binary, isolated from the user's config and `RUST_LOG`.
pub fn argsplit_cmd(config: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_argsplit"));
    cmd.env_remove("RUST_LOG");
    cmd.arg("--config").arg(config);
    cmd
}

pub fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("Failed to execute argsplit")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
