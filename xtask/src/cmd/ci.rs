use std::process::{Command, Stdio};

use anyhow::Result;

use crate::repo;

const GATE: &[(&str, &[&str])] = &[
    ("cargo fmt -- --check", &["fmt", "--", "--check"]),
    (
        "cargo clippy --workspace -- -D warnings",
        &["clippy", "--workspace", "--", "-D", "warnings"],
    ),
    ("cargo check --workspace", &["check", "--workspace"]),
    ("cargo test --workspace", &["test", "--workspace"]),
];

pub fn run() -> Result<()> {
    let root = repo::repo_root()?;
    for &(label, args) in GATE {
        run_step(&root, label, args)?;
    }
    Ok(())
}

fn run_step(root: &std::path::Path, label: &str, args: &[&str]) -> Result<()> {
    eprintln!("==> {label}");
    let status = Command::new("cargo")
        .args(args)
        .current_dir(root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        anyhow::bail!("{label} failed (status {status})");
    }
    Ok(())
}
