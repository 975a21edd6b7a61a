//! The handler trait implemented by every event consumer.

use buildspy_core::{BuildEvent, EventKind};

use crate::errors::Result;

/// A consumer for one kind of build event.
///
/// Handlers inspect the event passed to [`handle`](EventHandler::handle)
/// and report through the return value whether they consumed it. A
/// handler must decline (`Ok(false)`) any event it does not recognize
/// rather than fail, so dispatch can move on.
pub trait EventHandler: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// The event kind this handler claims, or `None` to act as the
    /// registry's single fallback for otherwise unclaimed events.
    fn supported_kind(&self) -> Option<EventKind>;

    /// Processes `event`, returning `Ok(true)` when it was consumed and
    /// `Ok(false)` when this handler is not responsible for it.
    fn handle(&self, event: &BuildEvent) -> Result<bool>;
}
