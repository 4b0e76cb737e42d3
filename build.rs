//! Embeds the commit hash and build date for `lander --version`.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const COMMIT_VAR: &str = "LANDER_BUILD_COMMIT";
const DATE_VAR: &str = "LANDER_BUILD_DATE";

/// Short hash of HEAD, or "unknown" outside a git checkout.
fn git_commit() -> String {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output();
    match output {
        Ok(out) if out.status.success() => {
            let hash = String::from_utf8_lossy(&out.stdout).trim().to_string();
            if hash.is_empty() {
                "unknown".to_string()
            } else {
                hash
            }
        }
        _ => "unknown".to_string(),
    }
}

fn main() {
    let commit = env::var(COMMIT_VAR).unwrap_or_else(|_| git_commit());
    let date =
        env::var(DATE_VAR).unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string());

    let generated = format!(
        "pub const BUILD_COMMIT: &str = {:?};\npub const BUILD_DATE: &str = {:?};\n",
        commit, date
    );
    let out = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR")).join("build_info.rs");
    fs::write(out, generated).expect("write build_info.rs");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed={}", COMMIT_VAR);
    println!("cargo:rerun-if-env-changed={}", DATE_VAR);
}
