//! Shared helpers for CLI integration tests

#![allow(dead_code)]

use assert_cmd::cargo_bin;
use std::path::Path;
use std::process::Command;

/// `docfill` run from `dir`, isolated from the caller's config and log level
pub fn docfill(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin!("docfill"));
    cmd.current_dir(dir)
        .env_remove("DOCFILL_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Today's date as the CLI formats it for the given pattern
pub fn today(format: &str) -> String {
    chrono::Local::now().date_naive().format(format).to_string()
}
