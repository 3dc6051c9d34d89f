//! # Project Specification
//!
//! File: cli/src/generator/spec.rs
//!
//! ## Overview
//!
//! Defines `ProjectSpec`, the immutable description of one generation run, and
//! the three option enums it is built from. It also owns the identifier grammar
//! (`[A-Za-z_][A-Za-z0-9_]*`) shared by the project name, the app name, the
//! generated Python package names and the output directory name. A name that
//! passes the grammar cannot contain a separator or `..`, so the grammar is also
//! the first line of path safety.
//!
//! The enums derive `clap::ValueEnum` (for `--type`, `--views`, `--db`) and
//! `serde::Deserialize` (for the `[defaults]` config table) with the same
//! lowercase spellings in both places.
//!
use crate::core::error::KickstartError;
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

/// The app package name used when none is given.
pub const DEFAULT_APP_NAME: &str = "core";

/// Whether the project renders HTML pages or exposes a REST API.
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Traditional Django with HTML templates.
    Mvp,
    /// Django REST Framework.
    Api,
}

/// Function-based or class-based Django views.
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewStyle {
    /// Function-Based Views.
    #[value(name = "fbv")]
    #[serde(rename = "fbv")]
    FunctionBased,
    /// Class-Based Views.
    #[value(name = "cbv")]
    #[serde(rename = "cbv")]
    ClassBased,
}

/// Database backend configured in `settings.py`.
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Sqlite,
    Postgresql,
}

impl ProjectType {
    pub const ALL: [ProjectType; 2] = [ProjectType::Mvp, ProjectType::Api];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Mvp => "mvp",
            ProjectType::Api => "api",
        }
    }

    /// Human-readable label used in menus and summaries.
    pub fn description(self) -> &'static str {
        match self {
            ProjectType::Mvp => "MVP - Traditional Django with HTML templates",
            ProjectType::Api => "API - Django REST Framework",
        }
    }
}

impl ViewStyle {
    pub const ALL: [ViewStyle; 2] = [ViewStyle::FunctionBased, ViewStyle::ClassBased];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewStyle::FunctionBased => "fbv",
            ViewStyle::ClassBased => "cbv",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ViewStyle::FunctionBased => "Function-Based Views (FBV)",
            ViewStyle::ClassBased => "Class-Based Views (CBV)",
        }
    }
}

impl Database {
    pub const ALL: [Database; 2] = [Database::Sqlite, Database::Postgresql];

    pub fn as_str(self) -> &'static str {
        match self {
            Database::Sqlite => "sqlite",
            Database::Postgresql => "postgresql",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Database::Sqlite => "SQLite (great for development)",
            Database::Postgresql => "PostgreSQL (recommended for production)",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ViewStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the generator needs to know about the project to create.
///
/// Constructed once from CLI flags, menu answers and config defaults; never
/// mutated afterwards. Validation happens in the orchestrator so that a spec
/// can be built freely in tests and by the prompt layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    pub name: String,
    pub app_name: String,
    pub project_type: ProjectType,
    pub view_style: ViewStyle,
    pub database: Database,
    pub with_containerization: bool,
}

impl ProjectSpec {
    /// A spec with the stock defaults (`mvp`, `fbv`, `sqlite`, app `core`, no Docker).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            app_name: DEFAULT_APP_NAME.to_string(),
            project_type: ProjectType::Mvp,
            view_style: ViewStyle::FunctionBased,
            database: Database::Sqlite,
            with_containerization: false,
        }
    }

    pub fn is_api(&self) -> bool {
        self.project_type == ProjectType::Api
    }

    /// Checks both package names against the identifier grammar and against
    /// each other (they share the project root, so they must differ).
    pub fn validate(&self) -> Result<(), KickstartError> {
        validate_identifier("project name", &self.name)?;
        validate_identifier("app name", &self.app_name)?;
        if self.app_name == self.name {
            return Err(KickstartError::InvalidName {
                field: "app name",
                value: self.app_name.clone(),
                reason: "must differ from the project name".to_string(),
            });
        }
        Ok(())
    }
}

/// Validates `value` against `[A-Za-z_][A-Za-z0-9_]*`.
///
/// `field` names the offending input in the error message ("project name",
/// "app name", ...).
pub fn validate_identifier(field: &'static str, value: &str) -> Result<(), KickstartError> {
    let invalid = |reason: &str| KickstartError::InvalidName {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = value.chars();
    let first = chars.next().ok_or_else(|| invalid("must not be empty"))?;
    if first.is_ascii_digit() {
        return Err(invalid("must not start with a digit"));
    }
    if !(first.is_ascii_alphabetic() || first == '_')
        || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(invalid("use only letters, numbers, and underscores"));
    }
    Ok(())
}

/// Convenience predicate over [`validate_identifier`].
#[cfg(test)]
fn is_identifier(value: &str) -> bool {
    validate_identifier("name", value).is_ok()
}
