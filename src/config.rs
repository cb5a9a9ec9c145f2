//! Run configuration.
//!
//! The tool takes no flags and reads no config file, so this is only ever
//! built from [`Config::default`]. Tests override individual fields.

use std::path::PathBuf;

/// Default maximum line size accepted by the reader (512 KiB).
pub const DEFAULT_MAX_LINE_BYTES: usize = 512 * 1024;

/// Substring a line must contain to be considered a flow record.
pub const FLOW_MARKER: &str = "\"flow\":";

/// Configuration for a deduplication run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for input files and receiving the output file
    pub input_dir: PathBuf,
    /// Glob pattern for input file names (not recursive)
    pub pattern: String,
    /// Cheap pre-filter applied before JSON parsing
    pub marker: String,
    /// Longest accepted line, excluding the terminator
    pub max_line_bytes: usize,
    /// Output file name prefix
    pub output_prefix: String,
    /// Output file extension (without the dot)
    pub output_extension: String,
    /// strftime format of the timestamp embedded in the output name
    pub timestamp_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            pattern: "*.log".to_string(),
            marker: FLOW_MARKER.to_string(),
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
            output_prefix: "unique-flows".to_string(),
            output_extension: "json".to_string(),
            timestamp_format: "%Y%m%d-%H%M%S".to_string(),
        }
    }
}

impl Config {
    /// Default configuration rooted at `dir` instead of the working directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: dir.into(),
            ..Self::default()
        }
    }
}
