//! # Django Kickstart Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! This module groups the filesystem helpers used by the generator:
//!
//! - **`io`**: directory creation, reading files, create-new writes and the
//!   executable bit.
//! - **`sandbox`**: resolution of relative output paths under a project root,
//!   rejecting anything that escapes it.
//!
//! Callers import the specific submodule, e.g.
//! `use crate::common::fs::{io, sandbox};`.
//!

/// Basic file I/O operations (`ensure_dir_exists`, `write_new_file`, ...).
pub mod io;
/// Containment check for output paths (`resolve`).
pub mod sandbox;
