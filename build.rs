use std::env;
use std::process::Command;

fn main() {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());

    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|v| v.trim().to_string())
        .unwrap_or_default();

    if !version.is_empty() {
        println!("cargo:rustc-env=RUSTC_VERSION={version}");
    }
    println!("cargo:rerun-if-env-changed=RUSTC");
}
