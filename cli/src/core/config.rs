//! # Django Kickstart Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the optional user configuration that supplies defaults for
//! `django-kickstart create`. Every option has a built-in default, so a missing
//! file is not an error; command-line flags always override whatever is loaded
//! here.
//!
//! ## Architecture
//!
//! Configuration sources (first match wins):
//! 1. The file named by the `DJANGO_KICKSTART_CONFIG` environment variable. It
//!    must exist when the variable is set.
//! 2. The user file `config.toml` in the platform config directory
//!    (`~/.config/django-kickstart/config.toml` on Linux), located with
//!    `directories::ProjectDirs`.
//! 3. Default values defined in the code.
//!
//! After loading, `~` in the interpreter path is expanded and the result is
//! validated (the default app name must be a valid identifier, the venv
//! directory a plain relative name). Unknown keys are rejected. Parse and validation
//! failures are `KickstartError::Config` errors naming the file or the field.
//!
//! ## Examples
//!
//! ```toml
//! [defaults]
//! project_type = "api"
//! view_style = "cbv"
//! database = "postgresql"
//! app_name = "core"
//! docker = true
//! create_venv = true
//!
//! [environment]
//! python = "~/.pyenv/shims/python3"
//! venv_dir = "venv"
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let project_type = args.project_type.unwrap_or(cfg.defaults.project_type);
//! ```
//!
use crate::common::fs::io;
use crate::core::error::{KickstartError, Result};
use crate::generator::spec::{
    validate_identifier, Database, ProjectType, ViewStyle, DEFAULT_APP_NAME,
};
use anyhow::anyhow;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "DJANGO_KICKSTART_CONFIG";

/// Represents the main configuration structure, loaded from TOML.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub environment: EnvironmentConfig,
}

/// Values used for options the user neither passed nor was asked about.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    #[serde(default = "default_project_type")]
    pub project_type: ProjectType,
    #[serde(default = "default_view_style")]
    pub view_style: ViewStyle,
    #[serde(default = "default_database")]
    pub database: Database,
    /// Name of the Django app package created next to the project package.
    #[serde(default = "default_app_name")]
    pub app_name: String,
    /// Generate Docker files without `--docker`; `--no-docker` turns it off.
    #[serde(default)]
    pub docker: bool,
    /// Create a virtual environment after generation unless `--no-venv`.
    #[serde(default = "default_true")]
    pub create_venv: bool,
}

/// Settings for the post-generation virtual environment.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Interpreter used for `-m venv` (can use ~). Will be expanded.
    #[serde(default = "default_python")]
    pub python: String,
    /// Directory name of the venv inside the project root.
    #[serde(default = "default_venv_dir")]
    pub venv_dir: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            project_type: default_project_type(),
            view_style: default_view_style(),
            database: default_database(),
            app_name: default_app_name(),
            docker: false,
            create_venv: true,
        }
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            python: default_python(),
            venv_dir: default_venv_dir(),
        }
    }
}

fn default_project_type() -> ProjectType {
    ProjectType::Mvp
}
fn default_view_style() -> ViewStyle {
    ViewStyle::FunctionBased
}
fn default_database() -> Database {
    Database::Sqlite
}
fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}
fn default_true() -> bool {
    true
}
fn default_python() -> String {
    if cfg!(windows) { "python" } else { "python3" }.to_string()
}
fn default_venv_dir() -> String {
    "venv".to_string()
}

/// Loads, expands and validates the configuration.
///
/// Honors [`CONFIG_ENV_VAR`] when set, otherwise the per-user file, otherwise
/// the built-in defaults.
pub fn load_config() -> Result<Config> {
    let override_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    load_config_with(override_path.as_deref())
}

/// Same as [`load_config`] with the override path passed explicitly.
pub fn load_config_with(override_path: Option<&Path>) -> Result<Config> {
    let mut config = match override_path {
        Some(path) => {
            info!("Loading configuration from {}: {}", CONFIG_ENV_VAR, path.display());
            if !path.is_file() {
                return Err(anyhow!(KickstartError::Config(format!(
                    "Configuration file '{}' named by {} does not exist.",
                    path.display(),
                    CONFIG_ENV_VAR
                ))));
            }
            load_config_from_path(path)?
        }
        None => load_user_config()?.unwrap_or_default(),
    };

    expand_config_paths(&mut config);
    validate_config(&config)?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "DjangoKickstart", "django-kickstart") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.is_file() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

/// Reads and parses one TOML configuration file (no expansion or validation).
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = io::read_file_to_string(path)?;
    toml::from_str(&content).map_err(|e| {
        anyhow!(KickstartError::Config(format!(
            "Failed to parse TOML from file '{}': {}",
            path.display(),
            e
        )))
    })
}

fn expand_config_paths(config: &mut Config) {
    config.environment.python = shellexpand::tilde(&config.environment.python).into_owned();
    debug!("Expanded python interpreter: {}", config.environment.python);
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating configuration...");

    validate_identifier("app name", &config.defaults.app_name).map_err(|e| {
        anyhow!(KickstartError::Config(format!(
            "[defaults] app_name: {}",
            e
        )))
    })?;

    if config.environment.python.trim().is_empty() {
        return Err(anyhow!(KickstartError::Config(
            "[environment] python must not be empty.".to_string()
        )));
    }

    let venv_dir = Path::new(&config.environment.venv_dir);
    let mut components = venv_dir.components();
    let is_plain_name = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !is_plain_name {
        return Err(anyhow!(KickstartError::Config(format!(
            "[environment] venv_dir '{}' must be a plain directory name inside the project.",
            config.environment.venv_dir
        ))));
    }

    debug!("Configuration validation successful.");
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_full_toml() {
        let toml_content = r#"
            [defaults]
            project_type = "api"
            view_style = "cbv"
            database = "postgresql"
            app_name = "catalog"
            docker = true
            create_venv = false

            [environment]
            python = "~/.pyenv/shims/python3"
            venv_dir = ".venv"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.defaults.project_type, ProjectType::Api);
        assert_eq!(config.defaults.view_style, ViewStyle::ClassBased);
        assert_eq!(config.defaults.database, Database::Postgresql);
        assert_eq!(config.defaults.app_name, "catalog");
        assert!(config.defaults.docker);
        assert!(!config.defaults.create_venv);
        assert_eq!(config.environment.python, "~/.pyenv/shims/python3"); // Not yet expanded
        assert_eq!(config.environment.venv_dir, ".venv");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[defaults]\ndatabase = \"postgresql\"\n").unwrap();
        assert_eq!(config.defaults.database, Database::Postgresql);
        assert_eq!(config.defaults.project_type, ProjectType::Mvp);
        assert_eq!(config.defaults.app_name, "core");
        assert!(config.defaults.create_venv);
        assert_eq!(config.environment, EnvironmentConfig::default());
    }

    #[test]
    fn test_unknown_fields_and_values_are_rejected() {
        assert!(toml::from_str::<Config>("[defaults]\ncolour = \"blue\"\n").is_err());
        assert!(toml::from_str::<Config>("[extras]\n").is_err());
        assert!(toml::from_str::<Config>("[defaults]\ndatabase = \"mysql\"\n").is_err());
    }

    #[test]
    fn test_python_path_expansion() {
        let mut config = Config::default();
        config.environment.python = "~/bin/python3".to_string();
        expand_config_paths(&mut config);

        let home_dir = directories::BaseDirs::new().unwrap().home_dir().to_path_buf();
        assert_eq!(
            config.environment.python,
            home_dir.join("bin/python3").to_string_lossy()
        );

        let mut config = Config::default();
        config.environment.python = "/usr/bin/python3".to_string();
        expand_config_paths(&mut config);
        assert_eq!(config.environment.python, "/usr/bin/python3"); // Absolute path unchanged
    }

    #[test]
    fn test_validate_config_defaults_are_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_config_invalid_app_name() {
        let mut config = Config::default();
        config.defaults.app_name = "my-app".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<KickstartError>(),
            Some(KickstartError::Config(_))
        ));
        assert!(err.to_string().contains("app_name"));
    }

    #[test]
    fn test_validate_config_venv_dir_must_be_plain_name() {
        for bad in ["../venv", "/tmp/venv", "a/b", "", "."] {
            let mut config = Config::default();
            config.environment.venv_dir = bad.to_string();
            assert!(validate_config(&config).is_err(), "{bad:?} accepted");
        }
    }

    #[test]
    fn test_load_config_with_override_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("kickstart.toml");
        fs::write(&path, "[defaults]\nproject_type = \"api\"\ndocker = true\n").unwrap();

        let config = load_config_with(Some(&path)).unwrap();
        assert_eq!(config.defaults.project_type, ProjectType::Api);
        assert!(config.defaults.docker);
    }

    #[test]
    fn test_load_config_with_missing_override_file() {
        let temp_dir = tempdir().unwrap();
        let err = load_config_with(Some(&temp_dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[defaults\n").unwrap();
        let err = load_config_with(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_load_config_errors_name_the_offending_field() {
        let temp_dir = tempdir().unwrap();

        let unknown = temp_dir.path().join("unknown.toml");
        fs::write(&unknown, "[defaults]\nunknown_key = 1\n").unwrap();
        let err = load_config_with(Some(&unknown)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<KickstartError>(),
            Some(KickstartError::Config(_))
        ));
        assert!(err.to_string().contains("unknown_key"), "{err}");

        let bad_app = temp_dir.path().join("app.toml");
        fs::write(&bad_app, "[defaults]\napp_name = \"my-app\"\n").unwrap();
        let err = load_config_with(Some(&bad_app)).unwrap_err();
        assert!(err.to_string().contains("app_name"), "{err}");
        assert!(err.to_string().contains("my-app"), "{err}");
    }
}
