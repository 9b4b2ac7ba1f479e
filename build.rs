//! Stamps the build with a version and a short commit id.
//!
//! `WXD_VERSION` falls back to the package version. `WXD_GIT_SHA` falls back
//! to a shortened `GITHUB_SHA`, then `git rev-parse`, then `unknown`.

use std::env;
use std::process::Command;

const SHORT_SHA_LEN: usize = 7;

fn main() {
    for var in ["WXD_VERSION", "WXD_GIT_SHA", "GITHUB_SHA"] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let version = env::var("WXD_VERSION")
        .or_else(|_| env::var("CARGO_PKG_VERSION"))
        .unwrap_or_else(|_| "unknown".into());

    let git_sha = env::var("WXD_GIT_SHA")
        .ok()
        .or_else(|| env::var("GITHUB_SHA").ok().map(shorten))
        .or_else(rev_parse_head)
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=WXD_VERSION={version}");
    println!("cargo:rustc-env=WXD_GIT_SHA={git_sha}");
}

fn shorten(sha: String) -> String {
    sha.chars().take(SHORT_SHA_LEN).collect()
}

fn rev_parse_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())?;
    let sha = String::from_utf8(out.stdout).ok()?;
    let sha = sha.trim();
    (!sha.is_empty()).then(|| sha.to_string())
}
