//! Writes the retained flow lines to the output file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::config::Config;
use crate::dedup::DedupStore;
use crate::error::DedupError;
use crate::files::filename;

/// Where the unique flows ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// Bare file name, as reported to the user
    pub filename: String,
    /// Full path inside the input directory
    pub path: PathBuf,
    /// Number of lines written
    pub lines: usize,
}

/// Writes each line unchanged, followed by `\n`. Returns the number of lines written.
pub fn write_lines<'a, W, I>(writer: &mut W, lines: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut count = 0;
    for line in lines {
        writer.write_all(line)?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    Ok(count)
}

/// Creates a freshly named output file in the input directory and drains
/// `store` into it. The file is flushed and closed before returning.
pub fn write_store(store: &DedupStore, config: &Config) -> Result<OutputFile, DedupError> {
    let filename = filename::generate(config)?;
    let path = config.input_dir.join(&filename);

    let file = File::create(&path).map_err(|source| DedupError::CreateOutput {
        path: path.clone(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    let lines = write_lines(&mut writer, store.lines())
        .and_then(|count| writer.flush().map(|()| count))
        .map_err(|source| DedupError::WriteOutput {
            path: path.clone(),
            source,
        })?;
    drop(writer);

    debug!(path = %path.display(), lines, "output written");

    Ok(OutputFile {
        filename,
        path,
        lines,
    })
}
