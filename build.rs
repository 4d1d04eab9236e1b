//! Build script for unitconv
//!
//! Embeds a per-target-dir build counter, the build time and the cargo
//! profile so the server banner and status tool can report them.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn next_build_number(counter: &Path) -> u64 {
    let previous = fs::read_to_string(counter)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(0);
    let next = previous + 1;

    if let Err(e) = fs::write(counter, next.to_string()) {
        println!("cargo:warning=Could not persist build counter: {}", e);
    }
    next
}

fn main() {
    println!("cargo:rerun-if-changed=src");

    // OUT_DIR is stable across rebuilds of the same profile
    let out_dir = env::var_os("OUT_DIR").map(PathBuf::from).unwrap_or_default();
    let build_number = next_build_number(&out_dir.join("build_counter"));

    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=UNITCONV_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=UNITCONV_BUILD_TIMESTAMP={}", timestamp);
    println!("cargo:rustc-env=UNITCONV_BUILD_PROFILE={}", profile);
}
