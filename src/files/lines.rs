//! Line reader with an upper bound on line length.
//!
//! `BufRead::lines` grows its buffer without limit. Flow logs occasionally
//! contain huge single-line records, so reading stops with
//! [`LineError::TooLong`] once a line exceeds the configured size instead.

use std::io::{self, BufRead, Read};

/// Errors produced while reading lines.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("line {line} exceeds {max} bytes")]
    TooLong { line: usize, max: usize },
}

/// Reads `\n`-terminated lines, stripping the terminator and a trailing `\r`.
pub struct LineReader<R> {
    inner: R,
    max_line_bytes: usize,
    buf: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R, max_line_bytes: usize) -> Self {
        Self {
            inner,
            max_line_bytes,
            buf: Vec::new(),
            line_number: 0,
        }
    }

    /// Next line without its terminator, or `None` at end of input.
    ///
    /// A final line with no trailing newline is still returned.
    pub fn next_line(&mut self) -> Result<Option<&[u8]>, LineError> {
        self.buf.clear();

        // Room for the longest allowed line plus "\r\n"
        let limit = self.max_line_bytes as u64 + 2;
        let read = (&mut self.inner)
            .take(limit)
            .read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let terminated = self.buf.last() == Some(&b'\n');
        if terminated {
            self.buf.pop();
        }
        if (terminated || (read as u64) < limit) && self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }

        if self.buf.len() > self.max_line_bytes {
            return Err(LineError::TooLong {
                line: self.line_number,
                max: self.max_line_bytes,
            });
        }

        Ok(Some(self.buf.as_slice()))
    }
}
