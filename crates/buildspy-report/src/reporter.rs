//! Reporter trait and the discarding implementation.

use buildspy_core::Element;

use crate::errors::Result;

/// Sink for report elements produced by event handlers.
///
/// Implementations own format framing, file naming, and flush/close
/// semantics; handlers only ever append finished elements. `append` is
/// called on whichever thread the host dispatches events from, so
/// implementations guard their interior state.
pub trait EventReporter: Send + Sync {
    /// Append one element to the report.
    fn append(&self, element: Element) -> Result<()>;

    /// Finish the report and release resources. Idempotent.
    fn close(&self) -> Result<()> {
        Ok(())
    }
}

/// Reporter that discards everything.
///
/// Wired when the spy is disabled, so handlers keep running without
/// producing output.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl EventReporter for NullReporter {
    fn append(&self, _element: Element) -> Result<()> {
        Ok(())
    }
}
