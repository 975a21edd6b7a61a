//! Handler registration and event dispatch.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use buildspy_core::{BuildEvent, EventKind};

use crate::errors::{HandlerError, Result};
use crate::handler::EventHandler;

/// Routes build events to registered handlers.
///
/// Each [`EventKind`] can be claimed by at most one handler, and a
/// single fallback handler may register for events no keyed handler
/// consumed. Registration conflicts are surfaced immediately rather
/// than at dispatch time.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<EventKind, Arc<dyn EventHandler>>,
    fallback: Option<Arc<dyn EventHandler>>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for the kind it declares.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::Registration`] when the declared kind is
    /// already claimed, or when a second fallback handler is offered.
    pub fn register(&mut self, handler: Arc<dyn EventHandler>) -> Result<()> {
        match handler.supported_kind() {
            Some(kind) => {
                if let Some(existing) = self.handlers.get(&kind) {
                    return Err(HandlerError::Registration(format!(
                        "kind {kind} already claimed by {} (rejecting {})",
                        existing.name(),
                        handler.name(),
                    )));
                }
                let _ = self.handlers.insert(kind, handler);
            }
            None => {
                if let Some(existing) = &self.fallback {
                    return Err(HandlerError::Registration(format!(
                        "fallback slot already claimed by {} (rejecting {})",
                        existing.name(),
                        handler.name(),
                    )));
                }
                self.fallback = Some(handler);
            }
        }
        Ok(())
    }

    /// Dispatches `event` to the handler registered for its kind,
    /// falling back to the catch-all when the keyed handler declines or
    /// none is registered.
    ///
    /// Returns `Ok(true)` when some handler consumed the event and
    /// `Ok(false)` when nobody did.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by a consulted handler.
    pub fn dispatch(&self, event: &BuildEvent) -> Result<bool> {
        if let Some(handler) = self.handlers.get(&event.kind()) {
            if handler.handle(event)? {
                return Ok(true);
            }
        }
        if let Some(fallback) = &self.fallback {
            return fallback.handle(event);
        }
        Ok(false)
    }

    /// Whether a keyed handler is registered for `kind`.
    #[must_use]
    pub fn contains(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Number of registered handlers, counting the fallback.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len() + usize::from(self.fallback.is_some())
    }

    /// Whether no handlers are registered at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty() && self.fallback.is_none()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<EventKind> = self.handlers.keys().copied().collect();
        kinds.sort_by_key(|kind| kind.to_string());
        f.debug_struct("HandlerRegistry")
            .field("kinds", &kinds)
            .field("fallback", &self.fallback.as_ref().map(|h| h.name()))
            .finish()
    }
}
