//! flowdedup - collapse repeated network flow records into unique flows.
//!
//! Scans `*.log` files in a directory, keeps the first line seen for each
//! `(source identity, destination identity, destination port)` triple and
//! writes the survivors to `unique-flows-YYYYMMDD-HHMMSS.json`.

pub mod config;
pub mod dedup;
pub mod error;
pub mod files;
pub mod flow;
pub mod output;
pub mod pipeline;

pub use config::Config;
pub use dedup::DedupStore;
pub use error::{DedupError, ScanError};
pub use flow::{parse_line, FlowKey, Rejection};
pub use pipeline::{run, run_with, RunStats, RunSummary};
