//! # Django Kickstart Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utility modules used by the generator and the command handlers,
//! kept apart from command-specific logic (`commands::`) and core
//! infrastructure (`core::`).
//!
//! ## Architecture
//!
//! - **`fs`**: filesystem I/O and the output path sandbox.
//! - **`process`**: running external programs (`python`, `pip`) and capturing
//!   their output.
//! - **`ui`**: interactive terminal prompts.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{fs::io, process, ui::prompts};
//! ```
//!

/// Utilities for filesystem operations (I/O, sandboxed path resolution).
pub mod fs;
/// Utilities for executing external processes.
pub mod process;
/// Utilities for terminal user interaction (prompts).
pub mod ui;
