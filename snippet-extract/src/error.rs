//! Error types for extraction runs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop an extraction run. Malformed individual entries are never
/// reported through this type; they are skipped or coerced instead.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input path does not exist
    #[error("Input file '{}' not found.", .path.display())]
    NotFound { path: PathBuf },

    /// The input exists but could not be read as UTF-8 text
    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not a JSON object of snippet definitions
    #[error("Failed to parse JSON from '{}': {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// The output table could not be serialized or written
    #[error("Failed to write to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExtractError {
    /// Path of the file the failing stage was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ExtractError::NotFound { path }
            | ExtractError::Read { path, .. }
            | ExtractError::Parse { path, .. }
            | ExtractError::Write { path, .. } => path,
        }
    }
}
