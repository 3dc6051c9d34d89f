//! # Django Kickstart Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational components shared by the generator and the commands:
//! - `config`: loading and validating the optional user configuration
//! - `error`: the `KickstartError` taxonomy and the `Result` alias
//! - `templating`: the Tera-backed `Renderer`
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config;
//! use crate::core::error::{KickstartError, Result};
//! use crate::core::templating::Renderer;
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
