//! Error types for level-io

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for level-io operations
#[derive(Debug, Error)]
pub enum LevelError {
    /// IO error occurred while reading or writing a stream
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The level file could not be opened
    #[error("Could not open file '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The line buffer could not be allocated
    #[error("Could not allocate {requested} bytes for line buffer")]
    Allocation { requested: usize },

    /// Line buffer capacity too small to hold a byte and the terminator slot
    #[error("Invalid line buffer capacity: {0} (must be at least 2)")]
    InvalidCapacity(usize),

    /// The stream ended before the requested number of lines was read
    #[error("Expected {expected} lines, stream ended after {found}")]
    InsufficientLines { expected: usize, found: usize },

    /// The stream ended where a record was required
    #[error("Unexpected end of input: {0}")]
    UnexpectedEof(String),

    /// Error parsing a level record
    #[error("Parse error: {0}")]
    Parse(String),

    /// Color string is not a 6-digit hex code
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
}

/// Result type alias for level-io operations
pub type Result<T> = std::result::Result<T, LevelError>;
