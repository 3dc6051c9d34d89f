//! # Django Kickstart CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and drives the compiled `django-kickstart` binary
//! through `assert_cmd`.
//!
//! Every command built here is isolated from the developer's machine: it
//! points `DJANGO_KICKSTART_CONFIG` at a config file inside the test's temp
//! directory, so a real `~/.config/django-kickstart/config.toml` never leaks
//! into test results.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// # Get Kickstart Command (`kickstart_cmd`)
///
/// An `assert_cmd::Command` for the compiled `django-kickstart` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn kickstart_cmd() -> Command {
    Command::cargo_bin("django-kickstart").expect("Failed to find django-kickstart binary")
}

/// A command running inside `workdir` with an isolated, empty config file.
pub fn kickstart_in(workdir: &Path) -> Command {
    kickstart_in_with_config(workdir, "")
}

/// Like [`kickstart_in`], with `config_toml` as the configuration.
pub fn kickstart_in_with_config(workdir: &Path, config_toml: &str) -> Command {
    let config_path = workdir.join(".kickstart-test-config.toml");
    std::fs::write(&config_path, config_toml).expect("Failed to write test config");

    let mut cmd = kickstart_cmd();
    cmd.current_dir(workdir)
        .env("DJANGO_KICKSTART_CONFIG", &config_path)
        .env_remove("RUST_LOG");
    cmd
}

/// Relative paths (with `/` separators) of every file under `root`.
pub fn files_under(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}

/// Entries directly inside `dir`, excluding the test config file.
pub fn top_level_entries(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.file_name().unwrap() != ".kickstart-test-config.toml")
        .collect();
    entries.sort();
    entries
}
