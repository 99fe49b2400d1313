//! Error types for pagesim.

use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Every variant aborts the current simulation run. Nothing is retried and
/// no partial result is produced.
#[derive(Debug, Error)]
pub enum Error {
    /// Frame capacity below 1.
    #[error("Memory frames can't be less than 1 (got {0})")]
    InvalidCapacity(usize),

    /// Policy name that is neither FIFO nor the frequency policy.
    #[error("Invalid algorithm '{0}', please use 'LRU' or 'FIFO'")]
    UnknownPolicy(String),

    /// Fault rate requested for a run that processed no references.
    ///
    /// Kept distinct from a 0% rate so callers can tell "no faults over N
    /// references" apart from "no references at all".
    #[error("Fault rate is undefined for an empty trace")]
    UndefinedRate,

    /// Insertion into a free slot was attempted on a full frame set.
    ///
    /// This indicates a bug - the driver evicts before inserting when full.
    #[error("No free frames available in frame set")]
    NoFreeFrames,

    /// Reserving storage for the frame set failed.
    #[error("Could not allocate frame set: {0}")]
    AllocationFailure(#[from] TryReserveError),

    /// I/O error on a sink or source without a known path.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error on a named file.
    #[error("File {} could not be accessed: {source}", .path.display())]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Attach a file path to an I/O error.
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileIo {
            path: path.into(),
            source,
        }
    }
}
