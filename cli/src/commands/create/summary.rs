//! # Create Command Output
//!
//! File: cli/src/commands/create/summary.rs
//!
//! ## Overview
//!
//! Everything `django-kickstart create` prints around the generation run:
//!
//! - the selected options, before anything is written;
//! - the generated tree (or, with `-v`, the list of written files);
//! - the numbered "next steps" and the URLs to open once the server runs.
//!
//! The text is assembled by pure functions (`render_options`, `render_tree`,
//! `next_steps`, `visit_urls`) so it can be tested without capturing stdout;
//! the `print_*` wrappers only write the result out.
//!
//! Example tree:
//!
//! ```text
//! blog/
//! ├── blog/
//! │   ├── __init__.py
//! │   └── settings.py
//! ├── core/
//! │   └── views.py
//! ├── .env.example
//! └── manage.py
//! ```
//!
use super::environment::activate_hint;
use crate::core::error::Result;
use crate::generator::spec::ProjectSpec;
use anyhow::Context;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// --- Constants for Tree Drawing ---
const TEE: &str = "├── ";
const ELBOW: &str = "└── ";
const PIPE: &str = "│   ";
const SPACER: &str = "    ";

/// Directory names never shown in the tree.
const TREE_SKIP: [&str; 2] = ["__pycache__", ".git"];

/// What happened to the optional virtual environment step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenvOutcome {
    Created,
    Failed,
    Skipped,
}

/// The option summary shown before generation starts.
pub fn render_options(spec: &ProjectSpec) -> String {
    let mut lines = vec![
        format!("📦 Creating project '{}'...", spec.name),
        format!("   Type:     {}", spec.project_type.description()),
        format!("   Views:    {}", spec.view_style.description()),
        format!("   Database: {}", spec.database.description()),
        format!("   App:      {}", spec.app_name),
    ];
    if spec.with_containerization {
        lines.push("   Docker:   Dockerfile + docker-compose.yml".to_string());
    }
    lines.join("\n")
}

pub fn print_options(spec: &ProjectSpec) {
    println!("\n{}\n", render_options(spec));
}

/// Renders the directory tree under `root` with `display_name` as the top
/// line. Directories come first, then files, each group sorted by name.
/// `extra_skip` names further directories to leave out (the venv).
pub fn render_tree(root: &Path, display_name: &str, extra_skip: &[&str]) -> Result<String> {
    if !root.is_dir() {
        anyhow::bail!(
            "Cannot print tree: Path '{}' is not a directory.",
            root.display()
        );
    }

    let skipped = |name: &str| TREE_SKIP.contains(&name) || extra_skip.contains(&name);
    let mut children: HashMap<PathBuf, Vec<(String, bool)>> = HashMap::new();
    let walker = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && skipped(&e.file_name().to_string_lossy())));
    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        let parent = entry.path().parent().unwrap_or(root).to_path_buf();
        children.entry(parent).or_default().push((
            entry.file_name().to_string_lossy().into_owned(),
            entry.file_type().is_dir(),
        ));
    }
    for siblings in children.values_mut() {
        // Directories first (true > false), then by name.
        siblings.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    }

    let mut output = format!("{}/\n", display_name);
    write_level(root, &children, "", &mut output);
    Ok(output)
}

fn write_level(
    dir: &Path,
    children: &HashMap<PathBuf, Vec<(String, bool)>>,
    prefix: &str,
    output: &mut String,
) {
    let Some(entries) = children.get(dir) else {
        return;
    };
    for (i, (name, is_dir)) in entries.iter().enumerate() {
        let is_last = i + 1 == entries.len();
        output.push_str(prefix);
        output.push_str(if is_last { ELBOW } else { TEE });
        output.push_str(name);
        if *is_dir {
            output.push('/');
        }
        output.push('\n');

        if *is_dir {
            let next_prefix = format!("{}{}", prefix, if is_last { SPACER } else { PIPE });
            write_level(&dir.join(name), children, &next_prefix, output);
        }
    }
}

/// Prints the generated structure: the written files in order when
/// `list_files` is set, the tree otherwise (without the `skip` directories).
pub fn print_structure(
    root: &Path,
    spec: &ProjectSpec,
    written: &[PathBuf],
    list_files: bool,
    skip: &[&str],
) {
    if list_files {
        for path in written {
            let shown = path.strip_prefix(root).unwrap_or(path);
            println!("  created {}", shown.display());
        }
        return;
    }
    match render_tree(root, &spec.name, skip) {
        Ok(tree) => print!("{}", tree),
        Err(e) => tracing::warn!("Could not render project tree: {:#}", e),
    }
}

/// Numbered follow-up commands for the user, starting with the `cd` into
/// `root` (relative to `cwd` when possible).
pub fn next_steps(
    spec: &ProjectSpec,
    root: &Path,
    cwd: Option<&Path>,
    venv: VenvOutcome,
    python: &str,
    venv_dir: &str,
) -> Vec<String> {
    let display_path = cwd
        .and_then(|cwd| pathdiff::diff_paths(root, cwd))
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| root.display().to_string());

    let mut steps = vec![format!("cd {}", display_path)];
    match venv {
        VenvOutcome::Created => steps.push(activate_hint(venv_dir)),
        VenvOutcome::Failed | VenvOutcome::Skipped => {
            steps.push(format!("{} -m venv {}", python, venv_dir));
            steps.push(activate_hint(venv_dir));
            steps.push("pip install -r requirements.txt".to_string());
        }
    }
    steps.push("cp .env.example .env".to_string());
    steps.push("python manage.py migrate".to_string());
    steps.push("python manage.py createsuperuser".to_string());
    steps.push("python manage.py runserver".to_string());
    if spec.with_containerization {
        steps.push("docker compose up --build   # or run everything in containers".to_string());
    }
    steps
}

/// Heading and URLs to open once the development server runs.
pub fn visit_urls(spec: &ProjectSpec) -> (&'static str, [&'static str; 2]) {
    if spec.is_api() {
        (
            "API endpoints:",
            ["http://127.0.0.1:8000/api/", "http://127.0.0.1:8000/admin/"],
        )
    } else {
        (
            "Visit:",
            ["http://127.0.0.1:8000/", "http://127.0.0.1:8000/admin/"],
        )
    }
}

/// Prints the success banner, next steps and URLs.
pub fn print_completion(spec: &ProjectSpec, root: &Path, steps: &[String]) {
    println!("\n✅ Project '{}' created successfully!", spec.name);
    println!("   Location: {}", root.display());

    println!("\nNext steps:");
    for (i, step) in steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    let (heading, urls) = visit_urls(spec);
    println!("\n{}", heading);
    for url in urls {
        println!("  {}", url);
    }
    println!();
}
