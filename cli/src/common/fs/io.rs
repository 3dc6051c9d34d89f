//! # Django Kickstart Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the filesystem input/output operations the
//! generator and the configuration loader need. It wraps `std::fs` so that
//! every failure carries the offending path.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if missing, and
//!   fails if the path exists but is not a directory.
//! - **`read_file_to_string`**: Reads a whole file with path context.
//! - **`write_new_file`**: Writes a file that must not exist yet. It opens with
//!   `create_new`, so an existing file is reported instead of overwritten; the
//!   generator never merges into existing content.
//! - **`set_executable`**: Adds the execute bits (`0o755`) on Unix; a no-op
//!   elsewhere.
//!
//! The write-side helpers return `KickstartError::Write` directly so the tree
//! writer can propagate a typed error; the read side returns `anyhow` errors
//! with context, like the rest of the CLI.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! io::ensure_dir_exists(&root.join("core/templates/core"))?;
//! io::write_new_file(&root.join("manage.py"), &rendered)?;
//! io::set_executable(&root.join("entrypoint.sh"))?;
//! ```
//!
use crate::core::error::{KickstartError, Result};
use anyhow::Context; // For adding context to errors
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, trace};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function creates the directory including
/// any necessary parents (similar to `mkdir -p`). If the path already exists
/// but is not a directory, an error is returned.
///
/// # Errors
///
/// Returns `KickstartError::Write` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> std::result::Result<(), KickstartError> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|source| KickstartError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Created directory: {}", path.display());
    } else if !path.is_dir() {
        return Err(KickstartError::Write {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "path exists but is not a directory",
            ),
        });
    } else {
        trace!("Directory already exists: {}", path.display());
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be found, opened, or read, with context
/// indicating which file failed.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}

/// Writes `content` to a file that must not exist yet, creating the parent
/// directory first.
///
/// # Errors
///
/// Returns `KickstartError::Write` if the parent cannot be created, the file
/// already exists, or the write itself fails (permissions, disk full).
pub fn write_new_file(path: &Path, content: &str) -> std::result::Result<(), KickstartError> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }

    let write_err = |source| KickstartError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Marks a file as executable (`rwxr-xr-x`). Default file creation does not
/// grant the execute bit, so scripts need this explicitly.
#[cfg(unix)]
pub fn set_executable(path: &Path) -> std::result::Result<(), KickstartError> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|source| {
        KickstartError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!("Marked {} as executable", path.display());
    Ok(())
}

/// Windows has no execute bit; the file is left as written.
#[cfg(not(unix))]
pub fn set_executable(path: &Path) -> std::result::Result<(), KickstartError> {
    trace!("Skipping executable bit for {} on this platform", path.display());
    Ok(())
}
