//! # Django Kickstart Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `django-kickstart` CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Architecture
//!
//! - Each top-level command is a variant of the `Commands` enum
//! - Commands are mapped to async handler functions in `commands::`
//! - All errors are propagated to this level, printed as `Error: <message>`,
//!   and turned into exit status 1
//!
//! ## Examples
//!
//! ```bash
//! # Scaffold a project, answering the menus
//! django-kickstart create blog
//!
//! # Non-interactive API project with PostgreSQL and Docker files
//! django-kickstart create shop --type api --db postgresql --docker --no-input
//!
//! # Run with increased verbosity
//! django-kickstart -vv create blog --no-venv
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Command handlers (create)
mod common; // Shared utilities (fs, process, ui)
mod core; // Core infrastructure (errors, config, templating)
mod generator; // Django project generation pipeline

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "django-kickstart",
    about = "🚀 Django Kickstart: Scaffold production-ready Django projects",
    long_about = "Generate a ready-to-run Django project (MVP or REST API, function- or\n\
                  class-based views, SQLite or PostgreSQL, optional Docker files).",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Create a new Django project scaffold.
    #[command(alias = "new")]
    Create(commands::create::CreateArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Create(args) => commands::create::handle_create(args, cli.verbose).await,
    };

    if let Err(e) = command_result {
        tracing::debug!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
