//! Bakes the `--version` string into the binary as `NUMBADGE_VERSION`.
//!
//! A build from a tagged commit reports the package version; anything else
//! reports `dev@<short hash>`, or `dev@unknown` outside a git checkout.

use std::process::Command;

fn git_stdout(args: &[&str]) -> Option<String> {
    let out = Command::new("git").args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&out.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}

fn main() {
    for watched in [".git/HEAD", ".git/refs/"] {
        println!("cargo:rerun-if-changed={watched}");
    }

    let tagged = git_stdout(&["describe", "--exact-match", "--tags", "HEAD"]).is_some();
    let version = if tagged {
        std::env::var("CARGO_PKG_VERSION").unwrap_or_default()
    } else {
        let hash = git_stdout(&["rev-parse", "--short", "HEAD"]);
        format!("dev@{}", hash.as_deref().unwrap_or("unknown"))
    };

    println!("cargo:rustc-env=NUMBADGE_VERSION={version}");
}
