//! Input file discovery.

use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::warn;

use crate::error::DedupError;

/// Lists entries directly inside `dir` whose name matches `pattern`.
///
/// Matches come back in the glob crate's order (alphabetical). The directory
/// part is escaped so only `pattern` is interpreted as a glob. Finding no
/// match at all is an error: there is nothing to deduplicate.
pub fn discover(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, DedupError> {
    let escaped = Pattern::escape(&dir.to_string_lossy());
    let full = Path::new(&escaped).join(pattern);

    let mut files = Vec::new();
    for entry in glob::glob(&full.to_string_lossy())? {
        match entry {
            Ok(path) => files.push(path),
            Err(e) => warn!(path = %e.path().display(), error = %e.error(), "skipping unreadable entry"),
        }
    }

    if files.is_empty() {
        return Err(DedupError::NoInputFiles);
    }

    Ok(files)
}

/// Name of `path` relative to the scanned directory, for diagnostics.
pub fn display_name(dir: &Path, path: &Path) -> String {
    path.strip_prefix(dir)
        .unwrap_or(path)
        .display()
        .to_string()
}
