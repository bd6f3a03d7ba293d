use std::process::Command;

/// Set by container builds, which copy the sources without `.git`.
const REVISION_OVERRIDE: &str = "ORDER_SERVICE_REVISION";

fn git(args: &[&str]) -> Option<std::process::Output> {
    Command::new("git").args(args).output().ok()
}

fn revision() -> String {
    if let Ok(rev) = std::env::var(REVISION_OVERRIDE) {
        if !rev.trim().is_empty() {
            return rev.trim().to_string();
        }
    }

    match git(&["rev-parse", "--short", "HEAD"]) {
        Some(head) if head.status.success() => {
            let hash = String::from_utf8_lossy(&head.stdout).trim().to_string();
            let dirty = git(&["status", "--porcelain", "--untracked-files=no"])
                .is_some_and(|s| s.status.success() && !s.stdout.is_empty());
            if dirty { format!("{hash}-dirty") } else { hash }
        }
        _ => "unknown".to_string(),
    }
}

fn main() {
    println!("cargo:rustc-env=GIT_HASH={}", revision());
    println!("cargo:rerun-if-env-changed={REVISION_OVERRIDE}");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
}
