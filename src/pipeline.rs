//! Run driver: discover inputs, collect unique flows, write them out.
//!
//! Failures are handled at three levels:
//! - per line: lines without the flow marker or that fail to parse are
//!   skipped silently and only counted in [`RunStats`]
//! - per file: open and read errors are reported on the diagnostics stream
//!   and the next file is processed
//! - per run: discovery and output errors abort with a [`DedupError`]

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::dedup::DedupStore;
use crate::error::{DedupError, ScanError};
use crate::files::{self, LineError, LineReader};
use crate::flow::{self, Rejection};
use crate::output::{self, OutputFile};

/// Counters gathered while scanning input files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub files_processed: usize,
    pub files_failed: usize,
    pub lines_read: usize,
    pub flow_lines: usize,
    pub malformed_lines: usize,
    pub duplicate_lines: usize,
}

/// Result of a complete run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub unique_flows: usize,
    pub output: OutputFile,
    pub stats: RunStats,
}

/// Feeds every line of `reader` through the parser into `store`.
///
/// Lines read before an error stay in the store.
pub fn collect_reader<R: BufRead>(
    reader: R,
    config: &Config,
    store: &mut DedupStore,
    stats: &mut RunStats,
) -> Result<(), LineError> {
    let mut lines = LineReader::new(reader, config.max_line_bytes);

    while let Some(raw) = lines.next_line()? {
        stats.lines_read += 1;

        // Invalid UTF-8 only matters for parsing; the stored line keeps the raw bytes
        let text = String::from_utf8_lossy(raw);

        match flow::parse_line_with_marker(&text, &config.marker) {
            Ok(key) => {
                stats.flow_lines += 1;
                if !store.insert_if_absent(key, raw) {
                    stats.duplicate_lines += 1;
                }
            }
            Err(Rejection::Malformed) => stats.malformed_lines += 1,
            Err(Rejection::NotAFlow) => {}
        }
    }

    Ok(())
}

/// Opens and scans one input file. The handle is closed on return.
pub fn collect_file(
    path: &Path,
    name: &str,
    config: &Config,
    store: &mut DedupStore,
    stats: &mut RunStats,
) -> Result<(), ScanError> {
    let file = File::open(path).map_err(|source| ScanError::Open {
        name: name.to_string(),
        source,
    })?;

    collect_reader(BufReader::new(file), config, store, stats).map_err(|e| match e {
        LineError::Io(source) => ScanError::Read {
            name: name.to_string(),
            source,
        },
        LineError::TooLong { line, max } => ScanError::LineTooLong {
            name: name.to_string(),
            line,
            max,
        },
    })
}

/// Writes one diagnostic line. A broken diagnostics stream never fails the run.
fn report<W: Write>(diag: &mut W, message: fmt::Arguments<'_>) {
    if let Err(e) = writeln!(diag, "{}", message) {
        debug!(error = %e, "failed to write diagnostic");
    }
}

/// Scans `files` in order, reporting progress and per-file failures to `diag`.
pub fn collect<W: Write>(
    files: &[PathBuf],
    config: &Config,
    diag: &mut W,
) -> (DedupStore, RunStats) {
    let mut store = DedupStore::new();
    let mut stats = RunStats::default();

    for path in files {
        let name = files::display_name(&config.input_dir, path);
        report(diag, format_args!("Processing file: {}", name));

        match collect_file(path, &name, config, &mut store, &mut stats) {
            Ok(()) => stats.files_processed += 1,
            Err(e) => {
                stats.files_failed += 1;
                report(diag, format_args!("{}", e));
            }
        }
    }

    (store, stats)
}

/// Runs the whole pipeline, writing diagnostics to stderr.
pub fn run(config: &Config) -> Result<RunSummary, DedupError> {
    run_with(config, &mut io::stderr().lock())
}

/// Runs the whole pipeline, writing diagnostics to `diag`.
pub fn run_with<W: Write>(config: &Config, diag: &mut W) -> Result<RunSummary, DedupError> {
    let inputs = files::discover(&config.input_dir, &config.pattern)?;
    debug!(count = inputs.len(), dir = %config.input_dir.display(), "discovered input files");

    let (store, stats) = collect(&inputs, config, diag);
    debug!(?stats, unique = store.len(), "finished scanning inputs");
    if store.is_empty() {
        debug!("no flow records found in any input");
    }

    let output = output::write_store(&store, config)?;
    let unique_flows = store.len();
    drop(store);

    report(diag, format_args!("Total unique flows: {}", unique_flows));
    report(diag, format_args!("Unique flows written to: {}", output.filename));

    Ok(RunSummary {
        unique_flows,
        output,
        stats,
    })
}
