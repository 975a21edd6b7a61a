//! In-memory report buffering.

use std::sync::Mutex;

use buildspy_core::Element;

use crate::errors::Result;
use crate::reporter::EventReporter;

/// Reporter that buffers appended elements in memory.
///
/// The standard collaborator in handler tests, and an embedding option for
/// hosts that post-process the report instead of writing a file.
#[derive(Debug, Default)]
pub struct BufferReporter {
    elements: Mutex<Vec<Element>>,
}

impl BufferReporter {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended so far.
    #[must_use]
    pub fn elements(&self) -> Vec<Element> {
        self.lock().clone()
    }

    /// Number of appended elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Element>> {
        match self.elements.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl EventReporter for BufferReporter {
    fn append(&self, element: Element) -> Result<()> {
        self.lock().push(element);
        Ok(())
    }
}
