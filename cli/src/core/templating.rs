//! # Django Kickstart Template Rendering
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! This module wraps the Tera templating engine behind `Renderer`, the single
//! rendering context used by one generation run. There is no process-wide
//! engine: the orchestrator constructs a `Renderer` from the compiled-in
//! catalog, passes it by reference to the tree writer, and drops it when the
//! run ends.
//!
//! ## Architecture
//!
//! - `Renderer::from_catalog` registers every catalog template into a fresh
//!   `tera::Tera` instance with autoescaping disabled (the outputs are source
//!   files, not HTML responses).
//! - `Renderer::from_sources` does the same for an arbitrary set of
//!   `(name, source)` pairs. Tests use it to build a renderer with templates
//!   missing or malformed.
//! - Custom filters are registered once at construction:
//!   - `pascal_case`: `my_app` -> `MyApp`, used for the generated `AppConfig`
//!     class name.
//!
//! Template syntax errors surface at construction; a lookup of a name that
//! was never registered surfaces at render time. Both are reported as
//! `KickstartError::Render` naming the template.
//!
//! ## Examples
//!
//! ```rust
//! let renderer = Renderer::from_catalog()?;
//! let context = tera::Context::from_serialize(&values)?;
//! let settings = renderer.render("project/settings.py", &context)?;
//! ```
//!
use crate::core::error::KickstartError;
use std::collections::HashMap;
use tera::{Tera, Value};
use tracing::{debug, trace};

/// A per-run template engine loaded with a fixed set of templates.
#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Builds a renderer holding every template of the compiled-in catalog.
    pub fn from_catalog() -> Result<Self, KickstartError> {
        Self::from_sources(crate::generator::catalog::entries())
    }

    /// Builds a renderer from explicit `(name, source)` pairs.
    pub fn from_sources<I>(sources: I) -> Result<Self, KickstartError>
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        let sources: Vec<(&str, &str)> = sources.into_iter().collect();
        let names: Vec<&str> = sources.iter().map(|(name, _)| *name).collect();

        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.register_filter("pascal_case", pascal_case_filter);
        tera.add_raw_templates(sources)
            .map_err(|source| KickstartError::Render {
                template: names.join(", "),
                source,
            })?;

        debug!("Template renderer ready with {} templates", names.len());
        Ok(Self { tera })
    }

    /// Renders the template registered as `name` against `context`.
    pub fn render(&self, name: &str, context: &tera::Context) -> Result<String, KickstartError> {
        trace!("Rendering template '{}'", name);
        self.tera
            .render(name, context)
            .map_err(|source| KickstartError::Render {
                template: name.to_string(),
                source,
            })
    }

    /// Whether a template with this name was registered.
    #[cfg(test)]
    fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|registered| registered == name)
    }
}

/// Tera filter form of [`to_pascal_case`].
fn pascal_case_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let input = tera::try_get_value!("pascal_case", "value", String, value);
    Ok(Value::String(to_pascal_case(&input)))
}

/// Converts a kebab-case or snake_case string to PascalCase (aka UpperCamelCase).
pub fn to_pascal_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut capitalize_next = true; // Start by capitalizing the first character.

    for c in input.chars() {
        if c == '-' || c == '_' {
            // Delimiter found, next character should be capitalized.
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            // Subsequent characters within a word are kept as is.
            result.push(c);
        }
    }
    result
}
