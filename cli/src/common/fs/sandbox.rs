//! # Output Path Sandbox (`common::fs::sandbox`)
//!
//! File: cli/src/common/fs/sandbox.rs
//!
//! ## Overview
//!
//! Resolves a relative output path against a project root and refuses any path
//! that would land outside that root. Every path the generator writes goes
//! through [`resolve`], even though all of them come from the static plan table.
//!
//! ## Architecture
//!
//! Resolution happens in two passes:
//! 1. **Lexical**: the relative path is folded component by component onto the
//!    root. `.` is dropped, `..` pops one level and may never pop past the root,
//!    and absolute paths (root or drive prefixes) are rejected outright. The
//!    output files do not exist yet, so this pass cannot rely on
//!    `fs::canonicalize`.
//! 2. **Canonical**: the deepest ancestor of the result that already exists is
//!    canonicalized (following symlinks) and must still sit under the
//!    canonicalized root. This catches a symlinked directory inside the tree
//!    pointing elsewhere.
//!
//! Containment is always checked with `Path::starts_with`, which compares whole
//! components, never with a string prefix (`/tmp/blog2` does not start with
//! `/tmp/blog`).
//!
use crate::core::error::KickstartError;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// Resolves `relative` under `root`, failing with `PathEscape` if the result
/// is not a strict descendant of `root`.
///
/// # Errors
///
/// - `KickstartError::PathEscape` when the path is absolute, climbs above the
///   root, resolves to the root itself, or reaches outside it through a symlink.
/// - `KickstartError::Write` when an existing ancestor cannot be canonicalized.
pub fn resolve(root: &Path, relative: &str) -> Result<PathBuf, KickstartError> {
    let escape = || KickstartError::PathEscape {
        root: root.to_path_buf(),
        relative: relative.to_string(),
    };

    // --- Pass 1: lexical folding ---
    let mut resolved = root.to_path_buf();
    let mut depth: usize = 0;
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => {
                resolved.push(part);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    warn!("Rejected output path '{}': climbs above the project root", relative);
                    return Err(escape());
                }
                resolved.pop();
                depth -= 1;
            }
            Component::RootDir | Component::Prefix(_) => {
                warn!("Rejected output path '{}': absolute paths are not allowed", relative);
                return Err(escape());
            }
        }
    }
    // A file target can never be the root directory itself.
    if depth == 0 || !resolved.starts_with(root) {
        return Err(escape());
    }

    // --- Pass 2: canonical containment of what already exists ---
    if let Some(existing) = deepest_existing_ancestor(&resolved, root) {
        let canonical_root = canonicalize(root)?;
        let canonical = canonicalize(&existing)?;
        if !canonical.starts_with(&canonical_root) {
            warn!(
                "Rejected output path '{}': '{}' resolves to '{}' outside the project root",
                relative,
                existing.display(),
                canonical.display()
            );
            return Err(escape());
        }
    }

    debug!("Resolved '{}' to {}", relative, resolved.display());
    Ok(resolved)
}

/// Walks up from `path` to the first ancestor (inclusive) that exists on disk,
/// stopping at `root`. Returns `None` when nothing at or below `root` exists
/// yet, which is the case for the first file of a run.
fn deepest_existing_ancestor(path: &Path, root: &Path) -> Option<PathBuf> {
    path.ancestors()
        .take_while(|candidate| candidate.starts_with(root))
        // `symlink_metadata` so a dangling link still counts as existing.
        .find(|candidate| candidate.symlink_metadata().is_ok())
        .map(Path::to_path_buf)
}

fn canonicalize(path: &Path) -> Result<PathBuf, KickstartError> {
    path.canonicalize().map_err(|source| KickstartError::Write {
        path: path.to_path_buf(),
        source,
    })
}
