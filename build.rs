//! Stamps `trimr --version` with build metadata.
//!
//! `TRIMR_BUILD_DATE` is always set. Dev builds also get `VERGEN_GIT_SHA`,
//! which is `unknown` outside a git checkout. The `release` feature leaves
//! the sha out so published binaries print a clean version.

use std::process::Command;

/// Build date as `YYYY-MM-DD`, honouring `SOURCE_DATE_EPOCH`.
fn build_date() -> String {
    let mut date = Command::new("date");
    date.arg("-u");
    if let Ok(epoch) = std::env::var("SOURCE_DATE_EPOCH") {
        date.arg("-d").arg(format!("@{}", epoch.trim()));
    }
    date.arg("+%Y-%m-%d");

    match date.output() {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        }
        _ => "unknown".to_string(),
    }
}

#[cfg(not(feature = "release"))]
fn emit_git_sha() {
    use vergen_gitcl::{Emitter, GitclBuilder};

    let emitted = GitclBuilder::default()
        .sha(true)
        .build()
        .map_err(|e| e.to_string())
        .and_then(|git| {
            Emitter::default()
                .add_instructions(&git)
                .and_then(|emitter| emitter.emit())
                .map_err(|e| e.to_string())
        });

    if let Err(e) = emitted {
        println!("cargo:warning=trimr: git sha unavailable: {}", e);
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    println!("cargo:rustc-env=TRIMR_BUILD_DATE={}", build_date());

    #[cfg(not(feature = "release"))]
    emit_git_sha();
}
