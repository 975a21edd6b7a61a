//! Error types for report emission.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors raised while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Underlying filesystem or stream failure.
    #[error("report I/O error: {0}")]
    Io(#[from] io::Error),

    /// The reports directory could not be prepared.
    #[error("cannot prepare reports directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// An append arrived after the report was closed.
    #[error("report already closed")]
    Closed,
}
