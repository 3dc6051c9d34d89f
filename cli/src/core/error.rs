//! # Django Kickstart Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the generator and the
//! CLI around it. It follows a two-layer approach:
//! - `KickstartError`: A `thiserror` enum naming every failure kind the
//!   generation pipeline can report.
//! - `Result<T>`: A type alias for `anyhow::Result<T>`, so handlers can attach
//!   context while the original kind stays reachable through `downcast_ref`.
//!
//! ## Taxonomy
//!
//! - `InvalidName`: a project or app name that fails the identifier grammar.
//! - `AlreadyExists`: the output root is already present on disk.
//! - `PathEscape`: a resolved output path would land outside the output root.
//! - `Render`: a template is missing from the catalog or fails to render.
//! - `Write`: any filesystem failure while materialising the tree.
//! - `Config`: an invalid configuration file.
//! - `ExternalCommand`: a child process (venv / pip) failed. Only the
//!   environment bootstrapper produces this and it is never fatal.
//!
//! ## Examples
//!
//! ```rust
//! match generator::generate(&spec) {
//!     Ok(root) => println!("Created {}", root.display()),
//!     Err(e) if matches!(e.downcast_ref::<KickstartError>(), Some(KickstartError::AlreadyExists { .. })) => {
//!         eprintln!("Pick another name.");
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the Django Kickstart application.
#[derive(Error, Debug)]
pub enum KickstartError {
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidName {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Directory '{}' already exists. Remove it first or choose a different project name.", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Path traversal detected: '{relative}' escapes the project directory '{}'.", root.display())]
    PathEscape { root: PathBuf, relative: String },

    #[error("Failed to render template '{template}': {source}")]
    Render {
        template: String,
        #[source]
        source: tera::Error,
    },

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("External command failed: {cmd}, Status: {status}, Output:\n{output}")]
    ExternalCommand {
        cmd: String,
        status: String,
        output: String,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let invalid = KickstartError::InvalidName {
            field: "project name",
            value: "1blog".into(),
            reason: "must not start with a digit".into(),
        };
        assert_eq!(
            invalid.to_string(),
            "Invalid project name '1blog': must not start with a digit"
        );

        let exists = KickstartError::AlreadyExists {
            path: PathBuf::from("/tmp/blog"),
        };
        assert!(exists.to_string().contains("'/tmp/blog' already exists"));

        let escape = KickstartError::PathEscape {
            root: PathBuf::from("/tmp/blog"),
            relative: "../../etc/passwd".into(),
        };
        assert!(escape.to_string().contains("'../../etc/passwd' escapes"));
        assert!(escape.to_string().contains("/tmp/blog"));
    }

    #[test]
    fn test_write_error_keeps_io_source() {
        use std::error::Error as _;
        let err = KickstartError::Write {
            path: PathBuf::from("/readonly/manage.py"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/readonly/manage.py"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_kind_survives_anyhow_context() {
        let err: anyhow::Error = anyhow::Error::new(KickstartError::AlreadyExists {
            path: PathBuf::from("blog"),
        })
        .context("Project generation failed");
        assert!(matches!(
            err.downcast_ref::<KickstartError>(),
            Some(KickstartError::AlreadyExists { .. })
        ));
    }
}
