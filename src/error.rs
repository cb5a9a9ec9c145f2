//! Error types for a deduplication run.

use std::path::PathBuf;

use crate::files::filename::FilenameError;

/// Errors that abort the whole run.
#[derive(Debug, thiserror::Error)]
pub enum DedupError {
    #[error("Error finding log files: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("No log files found in the current directory")]
    NoInputFiles,

    #[error("Error naming output file: {0}")]
    OutputName(#[from] FilenameError),

    #[error("Error creating output file: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing output file {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors confined to a single input file. The run continues with the next file.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Error opening file {name}: {source}")]
    Open {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading file {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading file {name}: line {line} exceeds {max} bytes")]
    LineTooLong { name: String, line: usize, max: usize },
}
