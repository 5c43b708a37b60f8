use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");

    let version = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| {
            let described = String::from_utf8_lossy(&o.stdout).trim().to_string();
            let described = described.strip_prefix('v').unwrap_or(&described).to_string();
            (!described.is_empty()).then_some(described)
        })
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").into());

    println!("cargo:rustc-env=REMINDERS_IMPORT_VERSION={version}");
}
