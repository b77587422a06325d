//! Shared test helpers for integration tests

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a pft command isolated from the user's config and environment
pub fn pft() -> Command {
    let home = std::env::temp_dir().join("pft-test-home");
    let mut cmd = Command::new(cargo::cargo_bin!("pft"));
    cmd.env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("PFT_CONFIG")
        .env_remove("PFT_RULE")
        .env_remove("PFT_FORMAT")
        .env_remove("PFT_LOG");
    cmd
}

/// Helper to create an empty working directory
pub fn setup_workdir() -> TempDir {
    TempDir::new().unwrap()
}

/// Write a frame document into `tmp` and return its path
pub fn write_frame(tmp: &TempDir, name: &str, yaml: &str) -> PathBuf {
    let path = tmp.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, yaml).unwrap();
    path
}

/// A frame that is valid under the default limits
pub const VALID_FRAME: &str = "title: Hallway\nouter_width: 60\nouter_length: 40\nouter_height: 5\ninner_height: 3\ninterval: 4\nhas_stand: true\n";

/// A frame whose inner length comes out negative (10 - 2 x 6)
pub const NEGATIVE_INNER_FRAME: &str = "title: Too narrow\nouter_width: 60\nouter_length: 10\ninterval: 6\n";

/// A frame with an out-of-range height
pub const OUT_OF_RANGE_FRAME: &str = "outer_height: 1000\n";
