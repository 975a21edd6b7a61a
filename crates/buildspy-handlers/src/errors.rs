//! Error types for event handling.

use std::io;
use std::path::PathBuf;

use buildspy_report::ReportError;
use thiserror::Error;

/// Result alias for handler operations.
pub type Result<T> = std::result::Result<T, HandlerError>;

/// Errors raised while registering handlers, dispatching events, or
/// building report elements.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// A path on a domain object could not be canonicalized.
    #[error("cannot canonicalize {}: {source}", path.display())]
    Canonicalize {
        /// The offending path.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// Invalid handler registration detected at startup.
    #[error("handler registration error: {0}")]
    Registration(String),

    /// The report collaborator rejected an append.
    #[error("report error: {0}")]
    Report(#[from] ReportError),
}
