//! Typed error definitions for ext_mover.
//! Fatal setup failures and per-file move failures share one enum so logs can
//! carry a stable `code` field.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtMoveError {
    #[error("Invalid extension filter '{ext}': {reason}")]
    InvalidExtension { ext: String, reason: &'static str },

    #[error("Source directory not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Source path is not a directory: {0}")]
    SourceNotDirectory(PathBuf),

    #[error("Cannot read source directory {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Destination exists but is not a directory: {0}")]
    DestinationNotDirectory(PathBuf),

    #[error("Failed to create destination directory {path}: {source}")]
    DestinationCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Traversal could not start at {path}: {source}")]
    WalkStart {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Candidate has no file name: {0}")]
    MissingFileName(PathBuf),

    #[error("Cannot check destination {path}: {source}")]
    DestinationProbe {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{detail} (destination '{to}')")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        detail: String,
        #[source]
        source: io::Error,
    },
}

impl ExtMoveError {
    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            ExtMoveError::InvalidExtension { .. } => 2,
            ExtMoveError::SourceNotFound(_) => 3,
            ExtMoveError::SourceNotDirectory(_) => 4,
            ExtMoveError::SourceUnreadable { .. } => 5,
            ExtMoveError::DestinationNotDirectory(_) => 6,
            ExtMoveError::DestinationCreate { .. } => 7,
            ExtMoveError::WalkStart { .. } => 8,
            ExtMoveError::MissingFileName(_) => 20,
            ExtMoveError::DestinationProbe { .. } => 21,
            ExtMoveError::Rename { .. } => 22,
        }
    }

    /// True for errors that abort the whole run rather than a single file.
    pub fn is_fatal(&self) -> bool {
        self.code() < 20
    }
}
