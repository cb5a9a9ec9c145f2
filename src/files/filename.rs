//! Output filename generation.
//!
//! Output files are named `{prefix}-{timestamp}.{extension}`, e.g.
//! `unique-flows-20240131-235959.json`. The timestamp has second resolution,
//! so two runs within the same second write to the same file.

use std::fmt::Write;

use chrono::{DateTime, Local, TimeZone};

use crate::config::Config;

/// Generates the output filename for a run starting now.
pub fn generate(config: &Config) -> Result<String, FilenameError> {
    generate_at(config, &Local::now())
}

/// Generates the output filename for the given instant.
///
/// Fails only if chrono cannot render `config.timestamp_format`.
pub fn generate_at<Tz>(config: &Config, at: &DateTime<Tz>) -> Result<String, FilenameError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut timestamp = String::new();
    write!(timestamp, "{}", at.format(&config.timestamp_format))
        .map_err(|_| FilenameError::InvalidFormat(config.timestamp_format.clone()))?;

    Ok(format!(
        "{}-{}.{}",
        config.output_prefix, timestamp, config.output_extension
    ))
}

/// Errors that can occur during filename generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilenameError {
    /// Timestamp format string chrono cannot render.
    InvalidFormat(String),
}

impl std::fmt::Display for FilenameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilenameError::InvalidFormat(fmt) => write!(f, "Invalid timestamp format: {}", fmt),
        }
    }
}

impl std::error::Error for FilenameError {}
