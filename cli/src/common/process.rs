//! # Django Kickstart Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Thin async wrappers around `tokio::process::Command` for the external tools
//! run after generation (`python -m venv`, `pip install`). Output is captured
//! rather than streamed so that a failure can be summarized to the user
//! instead of dumping the full pip log.
//!
//! ## Architecture
//!
//! - **`run_command_capture`**: Runs a program to completion, returning its
//!   stdout/stderr on success and `KickstartError::ExternalCommand` (with the
//!   captured stderr) on a non-zero exit.
//! - **`command_exists`**: Probes whether a program can be spawned at all.
//! - **`tail_lines`**: The last `n` non-empty lines of a block of output.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::process;
//!
//! let output = process::run_command_capture("python3", &["-m", "venv", "venv"], Some(root)).await?;
//! ```
//!
use crate::core::error::{KickstartError, Result};
use anyhow::{anyhow, Context};
use std::path::Path;
use std::process::Stdio;
use tracing::{debug, info};

/// Captured output of a successful command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs `program` with `args` (optionally inside `cwd`) and waits for it,
/// capturing both output streams.
///
/// # Errors
///
/// - An `anyhow` error with context if the program cannot be spawned (not
///   installed, not in `PATH`). The underlying `io::Error` stays reachable
///   through `downcast_ref`.
/// - `KickstartError::ExternalCommand` if it exits non-zero; `output` holds
///   its stderr (or stdout when stderr is empty).
pub async fn run_command_capture(
    program: &str,
    args: &[&str],
    cwd: Option<&Path>,
) -> Result<CommandOutput> {
    info!("Executing command: {} {:?}", program, args);
    let mut command = tokio::process::Command::new(program);
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
        debug!("Setting CWD for command to {}", dir.display());
    }
    command.stdin(Stdio::null());
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());

    let output = command.output().await.with_context(|| {
        format!(
            "Failed to execute command '{}'. Is it installed and in PATH?",
            program
        )
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        let exit_code = output
            .status
            .code()
            .map_or("?".to_string(), |c| c.to_string());
        debug!(
            "Command '{} {:?}' failed with exit code {}",
            program, args, exit_code
        );
        return Err(anyhow!(KickstartError::ExternalCommand {
            cmd: format!("{} {}", program, args.join(" ")),
            status: exit_code,
            output: if stderr.trim().is_empty() { stdout } else { stderr },
        }));
    }

    debug!("Command '{} {:?}' completed successfully.", program, args);
    Ok(CommandOutput { stdout, stderr })
}

/// Returns `true` if `program` can be spawned (`<program> --version`). A
/// non-zero exit still counts as present.
pub async fn command_exists(program: &str) -> bool {
    let status = tokio::process::Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;
    match status {
        Ok(status) => {
            debug!("Check status for '{}': {}", program, status);
            true
        }
        Err(e) => {
            debug!("Command '{}' not available: {}", program, e);
            false
        }
    }
}

/// The last `n` non-empty lines of `text`, in their original order.
pub fn tail_lines(text: &str, n: usize) -> Vec<&str> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].to_vec()
}
