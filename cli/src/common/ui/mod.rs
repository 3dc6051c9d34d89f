//! # Django Kickstart UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal interaction helpers. Plain status output goes through `println!`
//! in the command handlers; this module holds the pieces that read input.
//!
//! - **`prompts`**: numbered multiple-choice menus with a default.
//!
pub mod prompts;
