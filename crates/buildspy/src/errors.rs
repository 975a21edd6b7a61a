//! Error type for the spy facade.

use buildspy_handlers::HandlerError;
use buildspy_report::ReportError;
use thiserror::Error;

/// Result alias for spy operations.
pub type Result<T> = std::result::Result<T, SpyError>;

/// Errors surfaced by the spy entry points.
#[derive(Debug, Error)]
pub enum SpyError {
    /// Event handling failed.
    #[error(transparent)]
    Handler(#[from] HandlerError),

    /// Report emission failed.
    #[error(transparent)]
    Report(#[from] ReportError),
}
