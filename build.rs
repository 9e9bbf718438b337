use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=RUSTC");

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    match rustc_version_line(&rustc) {
        Some(line) => println!("cargo:rustc-env=HELLO_RUSTC_VERSION={line}"),
        None => println!("cargo:warning=could not query `{rustc} -V`; version will read unknown"),
    }

    if let Ok(target) = env::var("TARGET") {
        println!("cargo:rustc-env=HELLO_TARGET={target}");
    }
}

fn rustc_version_line(rustc: &str) -> Option<String> {
    let out = Command::new(rustc).arg("-V").output().ok()?;
    if !out.status.success() {
        return None;
    }
    let stdout = String::from_utf8(out.stdout).ok()?;
    let line = stdout.lines().next()?.trim();
    if line.is_empty() {
        return None;
    }
    Some(line.to_string())
}
