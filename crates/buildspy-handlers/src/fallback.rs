//! Catch-all handler for execution kinds with no dedicated handler.

use std::sync::Arc;

use buildspy_core::{BuildEvent, EventKind};
use buildspy_report::EventReporter;

use crate::elements::{execution_event_element, project_element};
use crate::errors::Result;
use crate::handler::EventHandler;

/// Serializes any execution event no keyed handler claimed as a generic
/// root plus the project it concerns.
///
/// Declares no kind, so it occupies the registry's fallback slot.
/// Dependency-resolution notifications are declined; they have their own
/// report shape.
pub struct CatchAllHandler {
    reporter: Arc<dyn EventReporter>,
}

impl CatchAllHandler {
    /// Create the handler with its report sink.
    #[must_use]
    pub fn new(reporter: Arc<dyn EventReporter>) -> Self {
        Self { reporter }
    }
}

impl EventHandler for CatchAllHandler {
    fn name(&self) -> &'static str {
        "catch-all"
    }

    fn supported_kind(&self) -> Option<EventKind> {
        None
    }

    fn handle(&self, event: &BuildEvent) -> Result<bool> {
        if !event.kind().is_execution() {
            return Ok(false);
        }
        let mut root = execution_event_element(event.kind());
        if let Some(project) = event.project() {
            root.add_child(project_element("project", project)?);
        }
        self.reporter.append(root)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use buildspy_core::model::ProjectModel;
    use buildspy_report::BufferReporter;

    use super::*;

    fn project() -> ProjectModel {
        ProjectModel {
            name: "Example App".into(),
            group_id: "com.example".into(),
            artifact_id: "app".into(),
            version: "1.0".into(),
            packaging: "jar".into(),
            base_dir: None,
            file: None,
            build: None,
            build_plugins: Vec::new(),
        }
    }

    #[test]
    fn occupies_the_fallback_slot() {
        let handler = CatchAllHandler::new(Arc::new(BufferReporter::new()));
        assert_eq!(handler.supported_kind(), None);
    }

    #[test]
    fn serializes_unclaimed_execution_kinds() {
        let reporter = Arc::new(BufferReporter::new());
        let handler = CatchAllHandler::new(reporter.clone());

        let consumed = handler
            .handle(&BuildEvent::SessionStarted { project: project() })
            .unwrap();
        assert!(consumed);
        let consumed = handler
            .handle(&BuildEvent::ProjectSkipped { project: project() })
            .unwrap();
        assert!(consumed);

        let elements = reporter.elements();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].attribute("type"), Some("SessionStarted"));
        assert_eq!(elements[0].child("project").unwrap().attribute("artifactId"), Some("app"));
        assert_eq!(elements[1].attribute("type"), Some("ProjectSkipped"));
    }

    #[test]
    fn declines_dependency_resolution_kinds() {
        let reporter = Arc::new(BufferReporter::new());
        let handler = CatchAllHandler::new(reporter.clone());
        let consumed = handler
            .handle(&BuildEvent::DependencyResolutionCompleted {
                resolved_dependencies: Vec::new(),
            })
            .unwrap();
        assert!(!consumed);
        assert!(reporter.is_empty());
    }
}
