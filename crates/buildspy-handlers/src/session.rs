//! Handler for session boundaries.

use buildspy_core::{BuildEvent, EventKind};

use crate::errors::Result;
use crate::handler::EventHandler;

/// Consumes the session-ended event without generating a report entry.
///
/// Registering this no-op keeps the catch-all handler from serializing
/// the event.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionEndedHandler;

impl SessionEndedHandler {
    /// Create the handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EventHandler for SessionEndedHandler {
    fn name(&self) -> &'static str {
        "session-ended"
    }

    fn supported_kind(&self) -> Option<EventKind> {
        Some(EventKind::SessionEnded)
    }

    fn handle(&self, event: &BuildEvent) -> Result<bool> {
        Ok(matches!(event, BuildEvent::SessionEnded { .. }))
    }
}
