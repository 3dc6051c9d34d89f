//! # Django Kickstart Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the command handlers of the CLI and makes them
//! accessible to the main application entry point (`main.rs`).
//!
//! ## Commands
//!
//! - `create`: scaffold a new Django project, optionally with a virtual
//!   environment.
//!
//! Each command defines its own arguments structure and an async handler
//! that processes those arguments.
//!

/// Scaffolds a new Django project (`django-kickstart create`).
pub mod create;
