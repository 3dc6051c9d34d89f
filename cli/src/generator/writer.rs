//! # Tree Writer
//!
//! File: cli/src/generator/writer.rs
//!
//! ## Overview
//!
//! Materializes a `GenerationPlan` under the output root. Entries are handled
//! strictly in plan order, one at a time:
//!
//! 1. Render the entry's template against the run's context.
//! 2. Resolve the output path through the sandbox.
//! 3. Create parent directories and write the file with create-new semantics.
//! 4. Set the executable bit when the entry asks for it.
//!
//! The first failure stops the run and is returned unchanged. Files written
//! before the failure stay on disk; nothing is rolled back.
//!
use super::context::GenerationContext;
use super::plan::GenerationPlan;
use crate::common::fs::{io, sandbox};
use crate::core::error::KickstartError;
use crate::core::templating::Renderer;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Writes every entry of `plan` under `root`, returning the absolute paths
/// written, in plan order.
///
/// # Errors
///
/// - `KickstartError::Render` if a template is missing or fails to render.
/// - `KickstartError::PathEscape` if an output path leaves `root`.
/// - `KickstartError::Write` for any filesystem failure, including a target
///   file that already exists.
pub fn write(
    plan: &GenerationPlan,
    context: &GenerationContext,
    renderer: &Renderer,
    root: &Path,
) -> Result<Vec<PathBuf>, KickstartError> {
    let mut written = Vec::with_capacity(plan.len());

    for entry in plan.entries() {
        let content = renderer.render(entry.template.name(), context.as_tera())?;
        let target = sandbox::resolve(root, &entry.output)?;

        io::write_new_file(&target, &content)?;
        if entry.executable {
            io::set_executable(&target)?;
        }

        debug!("Created {}", entry.output);
        written.push(target);
    }

    info!("Wrote {} files under {}", written.len(), root.display());
    Ok(written)
}
