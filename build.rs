//! Embeds version, commit hash, and build date for `--version` output.

use std::path::PathBuf;
use std::process::Command;
use std::{env, fs};

fn commit_hash() -> String {
    if let Ok(commit) = env::var("BUILD_COMMIT") {
        return commit;
    }
    // Fall back to git for local builds
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output();
    match output {
        Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout).trim().to_string(),
        _ => "unknown".to_string(),
    }
}

fn main() {
    let commit = commit_hash();
    let date = env::var("BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string());

    let generated = format!(
        "pub const BUILD_VERSION: &str = \"{}\";\n\
         pub const BUILD_COMMIT: &str = \"{}\";\n\
         pub const BUILD_DATE: &str = \"{}\";\n",
        env!("CARGO_PKG_VERSION"),
        commit,
        date
    );

    let dest = PathBuf::from(env::var("OUT_DIR").unwrap()).join("build_info.rs");
    fs::write(dest, generated).unwrap();

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
}
