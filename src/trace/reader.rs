//! Reference trace input.
//!
//! Traces are whitespace/line-delimited non-negative integers:
//! ```text
//! 1 2 3
//! 4
//! 1 2 5
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::common::{Error, PageId, Result};

/// Streams page ids out of a line-delimited source.
///
/// Tokens that are not non-negative integers are skipped with a warning, so
/// a stray header or comment never aborts a run. Read errors are yielded
/// once as `Err` and should end consumption.
#[derive(Debug)]
pub struct TraceReader<R> {
    reader: R,
    line: String,
    line_number: usize,
    pending: std::vec::IntoIter<PageId>,
}

impl<R: BufRead> TraceReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_number: 0,
            pending: Vec::new().into_iter(),
        }
    }

    fn parse_line(&self) -> Vec<PageId> {
        self.line
            .split_whitespace()
            .filter_map(|token| match token.parse::<PageId>() {
                Ok(page_id) => Some(page_id),
                Err(_) => {
                    warn!("line {}: skipping malformed page id '{}'", self.line_number, token);
                    None
                }
            })
            .collect()
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<PageId>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(page_id) = self.pending.next() {
                return Some(Ok(page_id));
            }

            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_number += 1;
                    self.pending = self.parse_line().into_iter();
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Read a whole trace into memory.
pub fn read_trace<R: BufRead>(reader: R) -> Result<Vec<PageId>> {
    TraceReader::new(reader).collect()
}

/// Read a trace file.
///
/// # Errors
/// - `Error::FileIo` naming `path` if it cannot be opened or read
pub fn read_trace_file(path: impl AsRef<Path>) -> Result<Vec<PageId>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::file(path, e))?;

    let trace = read_trace(BufReader::new(file)).map_err(|err| match err {
        Error::Io(e) => Error::file(path, e),
        other => other,
    })?;

    debug!("Read {} references from {}", trace.len(), path.display());
    Ok(trace)
}
