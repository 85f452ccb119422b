// src/cli/handlers.rs
use std::io::{self, Write};
use console::style;
use rand::Rng;
use thiserror::Error;

use crate::generators::{GeneratorError, PasswordGenerator};
use crate::models::{GeneratedPassword, StrengthReport};
use crate::policy;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Generation failed: {0}")]
    Generator(#[from] GeneratorError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

// Generate `count` passwords and print them, one per line or as a JSON array
pub fn handle_generate<R: Rng, W: Write>(
    generator: &mut PasswordGenerator<R>,
    count: usize,
    json: bool,
    out: &mut W,
) -> Result<Vec<GeneratedPassword>> {
    let generated = (0..count)
        .map(|_| generator.try_generate())
        .collect::<std::result::Result<Vec<_>, _>>()?;

    log::info!("Generated {} password(s)", generated.len());

    if json {
        serde_json::to_writer_pretty(&mut *out, &generated)?;
        writeln!(out)?;
    } else {
        for entry in &generated {
            writeln!(out, "{}", entry.password)?;
        }
    }

    Ok(generated)
}

// Check a password and print the verdict with any unmet criteria
pub fn handle_check<W: Write>(password: &str, json: bool, out: &mut W) -> Result<StrengthReport> {
    let report = policy::analyze(password);
    log::info!(
        "Checked password of {} characters: {}",
        report.length,
        if report.strong { "strong" } else { "weak" }
    );

    if json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else if report.strong {
        writeln!(out, "{} Password is strong", style("✅").green())?;
    } else {
        writeln!(out, "{} Password is not strong:", style("❌").red())?;
        for violation in &report.violations {
            writeln!(out, "  • {}", violation)?;
        }
    }

    Ok(report)
}

// Ask for a password without echoing it
pub fn prompt_password() -> Result<String> {
    use inquire::Password;

    let password = Password::new("🔐 Password to check:")
        .with_display_mode(inquire::PasswordDisplayMode::Hidden)
        .without_confirmation()
        .prompt()?;

    Ok(password)
}
