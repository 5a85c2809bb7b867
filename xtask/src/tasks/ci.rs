use colored::Colorize;
use std::process::{Command, ExitStatus, Stdio};

use crate::{project_root, DynError};

/// One cargo invocation in the CI sequence.
struct CiStep {
    name: &'static str,
    args: &'static [&'static str],
}

const STEPS: &[CiStep] = &[
    CiStep {
        name: "cargo check",
        args: &["check", "--workspace", "--all-targets"],
    },
    CiStep {
        name: "cargo clippy",
        args: &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
    },
    CiStep {
        name: "cargo nextest",
        args: &["nextest", "run", "-p", "mongodb_topology"],
    },
    CiStep {
        name: "cargo test on docs",
        args: &["test", "--doc", "-p", "mongodb_topology"],
    },
    CiStep {
        name: "demo example",
        args: &["run", "-p", "mongodb_topology", "--example", "demo"],
    },
    CiStep {
        name: "cargo fmt",
        args: &["fmt", "--all", "--", "--check"],
    },
];

/// Runs every step in order and stops at the first one that fails.
pub fn ci() -> Result<(), DynError> {
    for step in STEPS {
        println!("{}", format!("Running {}...", step.name).truecolor(255, 165, 0));
        let status = cargo_command(step.args).status()?;
        if !status.success() {
            print_error_with_status_code(step.name, status);
            return Err(format!("`{}` failed", step.name).into());
        }
    }

    println!("{}", "All CI steps passed".green());
    Ok(())
}

fn print_error_with_status_code(task: &str, status: ExitStatus) {
    let code = match status.code() {
        Some(x) => x.to_string(),
        None => "<< no status code >>".to_string(),
    };
    println!(
        "{} `{}` finished with a non-zero status code: {}",
        "Error:".red(),
        task.blue(),
        code
    );
}

fn cargo_command(args: &[&str]) -> Command {
    let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    let mut cmd = Command::new(cargo);
    cmd.current_dir(project_root())
        .args(args)
        .stdout(Stdio::inherit());
    cmd
}
