//! File system side of the pipeline: finding inputs, reading lines, naming output.

pub mod discover;
pub mod filename;
pub mod lines;

pub use discover::{discover, display_name};
pub use lines::{LineError, LineReader};
