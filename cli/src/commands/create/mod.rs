//! # Django Kickstart Create Command
//!
//! File: cli/src/commands/create/mod.rs
//!
//! ## Overview
//!
//! This module implements `django-kickstart create`, which scaffolds a new
//! Django project in the current directory. It handles:
//! - Parsing command-line options and filling gaps from the configuration file
//!   or, on a terminal, from interactive numbered menus
//! - Running the generator
//! - Optionally creating a virtual environment and installing dependencies
//! - Printing the generated structure and the next steps
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Load configuration (`core::config`)
//! 2. Validate the project name before asking anything
//! 3. Resolve each option: flag, else menu (interactive), else config default
//! 4. Generate the tree (`generator::generate`)
//! 5. Bootstrap the environment unless `--no-venv` (`environment`)
//! 6. Print the tree and next steps (`summary`)
//!
//! Only steps 1-4 can fail the command. A failing environment bootstrap is
//! reported with recovery instructions and the command still succeeds.
//!
//! ## Examples
//!
//! ```bash
//! # Ask for everything not given
//! django-kickstart create blog
//!
//! # Fully specified, no prompts
//! django-kickstart create shop --type api --views cbv --db postgresql --app catalog --docker
//!
//! # Files only
//! django-kickstart create blog --no-venv --no-input
//! ```
//!
pub mod environment;
pub mod summary;

use crate::common::ui::prompts;
use crate::core::config::{self, Config};
use crate::core::error::{KickstartError, Result};
use crate::generator::{
    self,
    spec::{validate_identifier, Database, ProjectSpec, ProjectType, ViewStyle},
};
use clap::Parser;
use environment::EnvironmentOptions;
use std::io::IsTerminal;
use summary::VenvOutcome;
use tracing::{debug, info};

/// # Create Arguments (`CreateArgs`)
///
/// Command-line arguments accepted by `django-kickstart create`.
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Name of the project. Must be a valid Python identifier; it names both
    /// the output directory and the settings package.
    pub project_name: String,

    /// Project type: mvp (HTML templates) or api (Django REST Framework).
    #[arg(long = "type", value_enum)]
    pub project_type: Option<ProjectType>,

    /// View style: fbv (function-based) or cbv (class-based).
    #[arg(long = "views", value_enum)]
    pub view_style: Option<ViewStyle>,

    /// Database backend.
    #[arg(long = "db", value_enum)]
    pub database: Option<Database>,

    /// Name of the Django app package (default: core).
    #[arg(long = "app")]
    pub app_name: Option<String>,

    /// Also generate Dockerfile and docker-compose.yml.
    #[arg(long, overrides_with = "no_docker")]
    pub docker: bool,

    /// Skip the Docker files even when the configuration enables them.
    #[arg(long, overrides_with = "docker")]
    pub no_docker: bool,

    /// Do not create a virtual environment or install dependencies.
    #[arg(long)]
    pub no_venv: bool,

    /// Never prompt; use configured defaults for options not given.
    #[arg(long)]
    pub no_input: bool,

    /// Python interpreter used to create the virtual environment.
    #[arg(long)]
    pub python: Option<String>,
}

/// # Handle Create Command (`handle_create`)
///
/// Entry point for `django-kickstart create`. `verbose` is the global `-v`
/// count; at one or more the written files are listed instead of the tree.
pub async fn handle_create(args: CreateArgs, verbose: u8) -> Result<()> {
    info!("Handling create command for '{}'", args.project_name);

    let cfg = config::load_config()?;

    // Fail on a bad name before asking any questions.
    validate_identifier("project name", &args.project_name)?;

    let interactive = !args.no_input && std::io::stdin().is_terminal();
    debug!("Interactive prompts: {}", interactive);
    let spec = resolve_spec(&args, &cfg, interactive)?;

    summary::print_options(&spec);

    let root = match generator::generate(&spec) {
        Ok(root) => root,
        Err(e) => {
            if let Some(hint) = partial_tree_hint(&e, &spec) {
                eprintln!("{}", hint);
            }
            return Err(e);
        }
    };

    let env_options = EnvironmentOptions {
        python: args
            .python
            .clone()
            .unwrap_or_else(|| cfg.environment.python.clone()),
        venv_dir: cfg.environment.venv_dir.clone(),
    };

    let venv = if args.no_venv || !cfg.defaults.create_venv {
        info!("Skipping virtual environment creation");
        VenvOutcome::Skipped
    } else if environment::create_environment(
        &root,
        &root.join("requirements.txt"),
        &env_options,
    )
    .await
    {
        VenvOutcome::Created
    } else {
        VenvOutcome::Failed
    };

    let written = generator::plan::select_plan(&spec)
        .outputs()
        .map(|relative| root.join(relative))
        .collect::<Vec<_>>();
    println!();
    summary::print_structure(
        &root,
        &spec,
        &written,
        verbose > 0,
        &[env_options.venv_dir.as_str()],
    );

    let cwd = std::env::current_dir().ok();
    let steps = summary::next_steps(
        &spec,
        &root,
        cwd.as_deref(),
        venv,
        &env_options.python,
        &env_options.venv_dir,
    );
    summary::print_completion(&spec, &root, &steps);
    Ok(())
}

/// Builds the `ProjectSpec` from flags, prompts (when `interactive`) and
/// configuration defaults, in that order of precedence.
fn resolve_spec(args: &CreateArgs, cfg: &Config, interactive: bool) -> Result<ProjectSpec> {
    let defaults = &cfg.defaults;

    let project_type = match args.project_type {
        Some(value) => value,
        None if interactive => prompts::ask(
            "Select project type:",
            &menu(&ProjectType::ALL, ProjectType::description),
            defaults.project_type,
        )?,
        None => defaults.project_type,
    };
    let view_style = match args.view_style {
        Some(value) => value,
        None if interactive => prompts::ask(
            "Select view style:",
            &menu(&ViewStyle::ALL, ViewStyle::description),
            defaults.view_style,
        )?,
        None => defaults.view_style,
    };
    let database = match args.database {
        Some(value) => value,
        None if interactive => prompts::ask(
            "Select database:",
            &menu(&Database::ALL, Database::description),
            defaults.database,
        )?,
        None => defaults.database,
    };

    let mut spec = ProjectSpec::new(args.project_name.clone());
    spec.app_name = args
        .app_name
        .clone()
        .unwrap_or_else(|| defaults.app_name.clone());
    spec.project_type = project_type;
    spec.view_style = view_style;
    spec.database = database;
    spec.with_containerization = match (args.docker, args.no_docker) {
        (true, _) => true,
        (_, true) => false,
        _ => defaults.docker,
    };
    Ok(spec)
}

fn menu<T: Copy>(values: &[T], describe: fn(T) -> &'static str) -> Vec<(T, &'static str)> {
    values.iter().map(|&value| (value, describe(value))).collect()
}

/// Recovery hint for failures that can leave a partially written project.
fn partial_tree_hint(error: &anyhow::Error, spec: &ProjectSpec) -> Option<String> {
    match error.downcast_ref::<KickstartError>()? {
        KickstartError::Render { .. }
        | KickstartError::Write { .. }
        | KickstartError::PathEscape { .. } => Some(format!(
            "The project directory '{}' may be incomplete. Remove it before trying again.",
            spec.name
        )),
        _ => None,
    }
}
