//! # Interactive Prompts (`common::ui::prompts`)
//!
//! File: cli/src/common/ui/prompts.rs
//!
//! ## Overview
//!
//! Numbered-menu prompts used by `create` to ask for options that were not
//! passed on the command line. The menu looks like:
//!
//! ```text
//! ? Select project type:
//!   > 1. MVP - Traditional Django with HTML templates
//!     2. API - Django REST Framework
//!   Enter choice (1-2):
//! ```
//!
//! An empty answer picks the marked default. Anything that is not a listed
//! number is rejected and the question is asked again. End of input also
//! selects the default, so a closed stdin can never hang the CLI.
//!
//! The functions are generic over the reader and writer so tests can drive
//! them with in-memory buffers; `ask` binds them to the real terminal.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Asks `label` on the terminal (stdin/stdout).
pub fn ask<T: Copy + PartialEq>(label: &str, choices: &[(T, &str)], default: T) -> Result<T> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_choice(&mut stdin.lock(), &mut stdout.lock(), label, choices, default)
}

/// Shows a numbered menu of `choices` and returns the selected value.
///
/// `default` must be one of `choices`; it is marked in the menu and returned
/// for an empty answer or end of input.
pub fn prompt_choice<T, R, W>(
    input: &mut R,
    output: &mut W,
    label: &str,
    choices: &[(T, &str)],
    default: T,
) -> Result<T>
where
    T: Copy + PartialEq,
    R: BufRead,
    W: Write,
{
    let default_index = choices
        .iter()
        .position(|(value, _)| *value == default)
        .unwrap_or(0);

    writeln!(output, "\n? {}", label)?;
    for (i, (_, description)) in choices.iter().enumerate() {
        let marker = if i == default_index { ">" } else { " " };
        writeln!(output, "  {} {}. {}", marker, i + 1, description)?;
    }

    loop {
        write!(output, "  Enter choice (1-{}): ", choices.len())?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read answer from stdin")?;
        let answer = line.trim();

        let selected = if read == 0 || answer.is_empty() {
            Some(default_index)
        } else {
            answer
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=choices.len()).contains(n))
                .map(|n| n - 1)
        };

        match selected {
            Some(index) => {
                let (value, description) = choices[index];
                writeln!(output, "  ✔ {}", description)?;
                debug!("Prompt '{}' answered with choice {}", label, index + 1);
                return Ok(value);
            }
            None => writeln!(output, "  Invalid choice. Try again.")?,
        }
    }
}
