//! Build script to capture build information for the footer.
//!
//! Sets BUILD_HOST, BUILD_COMMIT and BUILD_TIMESTAMP at compile time.

use std::process::Command;

/// Run a command and return its trimmed stdout, or "unknown".
fn capture(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    let vars = [
        ("BUILD_HOST", capture("hostname", &["-s"])),
        ("BUILD_COMMIT", capture("git", &["rev-parse", "--short", "HEAD"])),
        ("BUILD_TIMESTAMP", capture("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"])),
    ];
    for (name, value) in vars {
        println!("cargo:rustc-env={name}={value}");
    }

    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=build.rs");
}
