//! # Environment Bootstrapper
//!
//! File: cli/src/commands/create/environment.rs
//!
//! ## Overview
//!
//! Optional step run after a project has been generated: create a Python
//! virtual environment inside the project and install its `requirements.txt`.
//!
//! The generated project is already complete when this runs, so nothing here
//! is fatal. Every failure prints what went wrong plus the commands to finish
//! the job by hand, and [`create_environment`] reports the outcome as a plain
//! `bool`; the `create` command still exits successfully.
//!
//! ## Steps
//!
//! 1. `<python> -m venv <project>/<venv_dir>`
//! 2. Locate pip inside the venv (`bin/pip`, or `Scripts\pip.exe` on Windows).
//! 3. `<pip> install -r <manifest>`, skipped with a warning when the manifest
//!    is missing.
//!
use crate::common::process;
use crate::core::error::KickstartError;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Number of trailing stderr lines shown when `pip install` fails.
const PIP_ERROR_TAIL: usize = 5;

/// How to build the virtual environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentOptions {
    /// Interpreter used to run `-m venv`.
    pub python: String,
    /// Directory name of the venv, relative to the project root.
    pub venv_dir: String,
}

impl Default for EnvironmentOptions {
    fn default() -> Self {
        Self {
            python: if cfg!(windows) { "python" } else { "python3" }.to_string(),
            venv_dir: "venv".to_string(),
        }
    }
}

/// Path of the pip executable inside `venv_dir`.
pub fn venv_pip(venv_dir: &Path) -> PathBuf {
    if cfg!(windows) {
        venv_dir.join("Scripts").join("pip.exe")
    } else {
        venv_dir.join("bin").join("pip")
    }
}

/// Shell command that activates a venv named `venv_dir_name`.
pub fn activate_hint(venv_dir_name: &str) -> String {
    if cfg!(windows) {
        format!("{}\\Scripts\\activate", venv_dir_name)
    } else {
        format!("source {}/bin/activate", venv_dir_name)
    }
}

/// Creates the venv under `project_dir` and installs `manifest` into it.
///
/// Returns `true` when the venv exists at the end and dependencies were
/// installed (or there was no manifest to install), `false` otherwise.
pub async fn create_environment(
    project_dir: &Path,
    manifest: &Path,
    options: &EnvironmentOptions,
) -> bool {
    let venv_path = project_dir.join(&options.venv_dir);
    let venv_arg = venv_path.to_string_lossy().into_owned();

    // --- Step 1: Create the virtual environment ---
    println!("\n🐍 Creating virtual environment...");
    if !process::command_exists(&options.python).await {
        warn!("Python interpreter '{}' not found", options.python);
        println!("✖ Python executable not found: {}", options.python);
        println!(
            "  ⤷ Install Python 3 or pass --python, then run: python -m venv {}",
            options.venv_dir
        );
        return false;
    }
    match process::run_command_capture(&options.python, &["-m", "venv", venv_arg.as_str()], None)
        .await
    {
        Ok(output) => debug!("venv output: {}", output.stdout.trim()),
        Err(e) => {
            warn!("Virtual environment creation failed: {:#}", e);
            println!("✖ Failed to create virtual environment:");
            if let Some(KickstartError::ExternalCommand { output, .. }) =
                e.downcast_ref::<KickstartError>()
            {
                for line in process::tail_lines(output, PIP_ERROR_TAIL) {
                    println!("  {}", line);
                }
            }
            println!(
                "  ⤷ Your project files are fine. Create a venv manually with: {} -m venv {}",
                options.python, options.venv_dir
            );
            return false;
        }
    }
    println!("  ✔ Virtual environment created");

    // --- Step 2: Locate pip ---
    let pip_path = venv_pip(&venv_path);
    if !pip_path.exists() {
        warn!("pip missing from venv at {}", pip_path.display());
        println!("✖ pip not found in venv at {}", pip_path.display());
        return false;
    }

    if !manifest.is_file() {
        warn!("Manifest {} missing, skipping install", manifest.display());
        println!(
            "⚠ {} not found. Skipping dependency install.",
            manifest.display()
        );
        return true;
    }

    // --- Step 3: Install requirements ---
    println!("📦 Installing dependencies (this may take a moment)...");
    let pip = pip_path.to_string_lossy().into_owned();
    let manifest_arg = manifest.to_string_lossy().into_owned();
    match process::run_command_capture(&pip, &["install", "-r", manifest_arg.as_str()], Some(project_dir))
        .await
    {
        Ok(output) => {
            debug!("pip stderr: {}", output.stderr.trim());
            info!("Dependencies installed into {}", venv_path.display());
            println!("  ✔ Dependencies installed successfully");
            true
        }
        Err(e) => {
            warn!("Dependency install failed: {:#}", e);
            println!("✖ Failed to install dependencies:");
            if let Some(KickstartError::ExternalCommand { output, .. }) =
                e.downcast_ref::<KickstartError>()
            {
                for line in process::tail_lines(output, PIP_ERROR_TAIL) {
                    println!("  {}", line);
                }
            }
            println!("  ⤷ You can retry manually:");
            println!("     {}", activate_hint(&options.venv_dir));
            println!("     pip install -r requirements.txt");
            false
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_options() {
        let options = EnvironmentOptions::default();
        assert_eq!(options.venv_dir, "venv");
        if cfg!(windows) {
            assert_eq!(options.python, "python");
        } else {
            assert_eq!(options.python, "python3");
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_unix_paths_and_hint() {
        assert_eq!(venv_pip(Path::new("/p/venv")), PathBuf::from("/p/venv/bin/pip"));
        assert_eq!(activate_hint("venv"), "source venv/bin/activate");
        assert_eq!(activate_hint(".venv"), "source .venv/bin/activate");
    }

    #[cfg(windows)]
    #[test]
    fn test_windows_paths_and_hint() {
        assert_eq!(
            venv_pip(Path::new(r"C:\p\venv")),
            PathBuf::from(r"C:\p\venv\Scripts\pip.exe")
        );
        assert_eq!(activate_hint("venv"), r"venv\Scripts\activate");
    }

    #[tokio::test]
    async fn test_missing_interpreter_returns_false() {
        let project = tempdir().unwrap();
        let options = EnvironmentOptions {
            python: "django-kickstart-no-such-python".to_string(),
            ..Default::default()
        };
        let ok = create_environment(
            project.path(),
            &project.path().join("requirements.txt"),
            &options,
        )
        .await;
        assert!(!ok);
        assert!(!project.path().join("venv").exists());
    }

    /// Requires a Python 3 interpreter with the `venv` module on PATH.
    #[tokio::test]
    #[ignore]
    async fn test_venv_without_manifest_succeeds() {
        let project = tempdir().unwrap();
        let ok = create_environment(
            project.path(),
            &project.path().join("requirements.txt"),
            &EnvironmentOptions::default(),
        )
        .await;
        assert!(ok);
        assert!(venv_pip(&project.path().join("venv")).exists());
    }

    /// Requires Python 3; pip fails resolving a package that does not exist.
    #[tokio::test]
    #[ignore]
    async fn test_failing_install_returns_false() {
        let project = tempdir().unwrap();
        let manifest = project.path().join("requirements.txt");
        std::fs::write(&manifest, "django-kickstart-no-such-package==0.0.0\n").unwrap();
        let ok = create_environment(project.path(), &manifest, &EnvironmentOptions::default()).await;
        assert!(!ok);
        assert!(project.path().join("venv").exists());
    }
}
