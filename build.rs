//! Build script for folio - embeds build date and git commit hash.
//!
//! Default dev builds emit both `FOLIO_BUILD_DATE` and `FOLIO_GIT_SHA`.
//! With the `release` feature (CI/official builds) only the date is
//! emitted, giving a clean version string without a git hash. Both values
//! degrade to "unknown" when the underlying tool is unavailable, so builds
//! outside a git checkout still work.

use std::env;
use std::process::Command;

/// Run a command and return its trimmed stdout on success.
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if stdout.is_empty() {
        None
    } else {
        Some(stdout)
    }
}

fn main() {
    let build_date = command_stdout("date", &["+%Y-%m-%d"]).unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=FOLIO_BUILD_DATE={}", build_date);

    // Official builds get a clean version string without the git hash
    let release = env::var("CARGO_FEATURE_RELEASE").is_ok();
    if !release {
        let sha = command_stdout("git", &["rev-parse", "--short", "HEAD"])
            .unwrap_or_else(|| "unknown".to_string());
        println!("cargo:rustc-env=FOLIO_GIT_SHA={}", sha);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
