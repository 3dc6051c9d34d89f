//! # Generation Context Builder
//!
//! File: cli/src/generator/context.rs
//!
//! ## Overview
//!
//! Turns a `ProjectSpec` into the substitution context shared by every template
//! render of one run. The mapping is deterministic except for `secret_key`, a
//! fresh 50-character token drawn from a CSPRNG for Django's `SECRET_KEY`.
//!
//! Keys exposed to templates:
//!
//! | key | value |
//! |---|---|
//! | `project_name`, `app_name` | package names |
//! | `project_type`, `view_style`, `database` | CLI spellings (`mvp`, `cbv`, ...) |
//! | `secret_key` | generated token |
//! | `is_api`, `is_mvp`, `is_cbv`, `is_fbv`, `is_postgresql`, `is_sqlite`, `is_docker` | convenience flags |
//!
//! The secret is never logged: `GenerationContext`'s `Debug` output redacts it.
//!
use super::spec::{Database, ProjectSpec, ProjectType, ViewStyle};
use rand::Rng;
use std::fmt;

/// Length of the generated `SECRET_KEY`.
pub const SECRET_KEY_LENGTH: usize = 50;

/// ASCII letters, digits and punctuation (94 symbols).
pub const SECRET_KEY_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Immutable substitution values for one generation run.
#[derive(Clone)]
pub struct GenerationContext {
    values: tera::Context,
}

impl GenerationContext {
    /// The underlying Tera context handed to the renderer.
    pub fn as_tera(&self) -> &tera::Context {
        &self.values
    }

    #[cfg(test)]
    pub fn secret_key(&self) -> &str {
        self.values
            .get("secret_key")
            .and_then(|value| value.as_str())
            .unwrap_or_default()
    }

    /// Looks up a single value.
    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&tera::Value> {
        self.values.get(key)
    }
}

impl fmt::Debug for GenerationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut redacted = self.values.clone().into_json();
        if let Some(map) = redacted.as_object_mut() {
            map.insert("secret_key".into(), "<redacted>".into());
        }
        f.debug_struct("GenerationContext")
            .field("values", &redacted)
            .finish()
    }
}

/// Builds the context for `spec`, generating a fresh secret key.
pub fn build_context(spec: &ProjectSpec) -> GenerationContext {
    let secret_key = generate_secret_key();

    let mut values = tera::Context::new();
    values.insert("project_name", &spec.name);
    values.insert("app_name", &spec.app_name);
    values.insert("project_type", spec.project_type.as_str());
    values.insert("view_style", spec.view_style.as_str());
    values.insert("database", spec.database.as_str());
    values.insert("secret_key", &secret_key);

    values.insert("is_api", &(spec.project_type == ProjectType::Api));
    values.insert("is_mvp", &(spec.project_type == ProjectType::Mvp));
    values.insert("is_cbv", &(spec.view_style == ViewStyle::ClassBased));
    values.insert("is_fbv", &(spec.view_style == ViewStyle::FunctionBased));
    values.insert("is_postgresql", &(spec.database == Database::Postgresql));
    values.insert("is_sqlite", &(spec.database == Database::Sqlite));
    values.insert("is_docker", &spec.with_containerization);

    GenerationContext { values }
}

/// Draws [`SECRET_KEY_LENGTH`] symbols from [`SECRET_KEY_ALPHABET`] using the
/// thread-local CSPRNG (OS-seeded ChaCha).
pub fn generate_secret_key() -> String {
    let mut rng = rand::rng();
    (0..SECRET_KEY_LENGTH)
        .map(|_| SECRET_KEY_ALPHABET[rng.random_range(0..SECRET_KEY_ALPHABET.len())] as char)
        .collect()
}
