#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
        .canonicalize()
        .expect("fixture present")
}

/// CLI invocation with colors and logs suppressed and no inherited overrides.
pub fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("ecoroute-cli");
    cmd.env("NO_COLOR", "1")
        .env("RUST_LOG", "error")
        .env_remove("ECOROUTE_VEHICLE_DATA");
    cmd
}
