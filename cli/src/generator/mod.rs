//! # Django Project Generator
//!
//! File: cli/src/generator/mod.rs
//!
//! ## Overview
//!
//! The generator turns a `ProjectSpec` into a Django project tree on disk. It is
//! a synchronous, single-threaded pipeline with no I/O besides the output root:
//!
//! ```text
//! validate names -> check root is free -> renderer + context + plan -> write tree
//! ```
//!
//! ## Architecture
//!
//! - **`spec`**: `ProjectSpec`, the option enums and the identifier grammar.
//! - **`catalog`**: the compiled-in templates, addressed by `TemplateId`.
//! - **`context`**: the substitution values for one run, including the secret.
//! - **`plan`**: which template renders to which relative path.
//! - **`writer`**: renders, sandboxes and writes each plan entry.
//!
//! The orchestrator below drives those pieces through the run states
//! `Validated -> PlanSelected -> Writing -> Complete | Failed`, logging each
//! transition. A failure after writing has started leaves the partial tree in
//! place; the caller decides what to tell the user.
//!
//! ## Examples
//!
//! ```rust
//! let mut spec = ProjectSpec::new("blog");
//! spec.project_type = ProjectType::Api;
//! let root = generator::generate(&spec)?;
//! ```
//!
pub mod catalog;
pub mod context;
pub mod plan;
pub mod spec;
pub mod writer;

use crate::core::error::{KickstartError, Result};
use crate::core::templating::Renderer;
use anyhow::Context;
use spec::ProjectSpec;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Generates the project described by `spec` in the current working directory.
///
/// Returns the absolute path of the created project root.
pub fn generate(spec: &ProjectSpec) -> Result<PathBuf> {
    let base = std::env::current_dir().context("Failed to determine current directory")?;
    generate_in(&base, spec)
}

/// Generates the project described by `spec` under `base`, i.e. into
/// `base/<spec.name>`.
///
/// # Errors
///
/// The returned `anyhow::Error` wraps a [`KickstartError`]:
/// - `InvalidName` before anything touches the disk.
/// - `AlreadyExists` when `base/<name>` is already present; nothing is written.
/// - `Render`, `PathEscape` or `Write` from the tree writer. Files written
///   before the failure remain.
pub fn generate_in(base: &Path, spec: &ProjectSpec) -> Result<PathBuf> {
    spec.validate()?;
    debug!("Validated project spec: {:?}", spec);

    let root = base.join(&spec.name);
    // `symlink_metadata` so a dangling link named like the project also counts.
    if root.symlink_metadata().is_ok() {
        return Err(KickstartError::AlreadyExists { path: root }.into());
    }

    let renderer = Renderer::from_catalog()?;
    let context = context::build_context(spec);
    let plan = plan::select_plan(spec);
    debug!(
        "Selected plan with {} files for {} / {} / {}",
        plan.len(),
        spec.project_type,
        spec.view_style,
        spec.database
    );

    info!("Writing project '{}' to {}", spec.name, root.display());
    match writer::write(&plan, &context, &renderer, &root) {
        Ok(written) => {
            info!(
                "Project '{}' complete ({} files)",
                spec.name,
                written.len()
            );
            Ok(root)
        }
        Err(e) => {
            warn!("Generation of '{}' failed: {}", spec.name, e);
            Err(e.into())
        }
    }
}
