//! Handlers for project/module build boundaries.

use std::sync::Arc;

use buildspy_core::extensions::ExtensionResolver;
use buildspy_core::{BuildEvent, Element, EventKind};
use buildspy_report::EventReporter;

use crate::elements::{
    artifact_element, execution_event_element, failure_element, file_element, project_element,
};
use crate::errors::Result;
use crate::handler::EventHandler;

/// Reports the start of a project/module build.
pub struct ProjectStartedHandler {
    reporter: Arc<dyn EventReporter>,
}

impl ProjectStartedHandler {
    /// Create the handler with its report sink.
    #[must_use]
    pub fn new(reporter: Arc<dyn EventReporter>) -> Self {
        Self { reporter }
    }
}

impl EventHandler for ProjectStartedHandler {
    fn name(&self) -> &'static str {
        "project-started"
    }

    fn supported_kind(&self) -> Option<EventKind> {
        Some(EventKind::ProjectStarted)
    }

    fn handle(&self, event: &BuildEvent) -> Result<bool> {
        let BuildEvent::ProjectStarted { project } = event else {
            return Ok(false);
        };
        let mut root = execution_event_element(EventKind::ProjectStarted);
        root.add_child(project_element("project", project)?);
        self.reporter.append(root)?;
        Ok(true)
    }
}

/// Reports a successful project build, including the produced artifacts
/// and their on-disk files.
pub struct ProjectSucceededHandler {
    reporter: Arc<dyn EventReporter>,
    extensions: Arc<dyn ExtensionResolver>,
}

impl ProjectSucceededHandler {
    /// Create the handler with its report sink and extension table.
    #[must_use]
    pub fn new(reporter: Arc<dyn EventReporter>, extensions: Arc<dyn ExtensionResolver>) -> Self {
        Self { reporter, extensions }
    }
}

impl EventHandler for ProjectSucceededHandler {
    fn name(&self) -> &'static str {
        "project-succeeded"
    }

    fn supported_kind(&self) -> Option<EventKind> {
        Some(EventKind::ProjectSucceeded)
    }

    fn handle(&self, event: &BuildEvent) -> Result<bool> {
        let BuildEvent::ProjectSucceeded {
            project,
            artifact,
            attached_artifacts,
        } = event
        else {
            return Ok(false);
        };

        let mut root = execution_event_element(EventKind::ProjectSucceeded);
        root.add_child(project_element("project", project)?);

        let mut main = artifact_element("artifact", artifact, self.extensions.as_ref());
        main.add_child(file_element("file", artifact.file.as_deref())?);
        root.add_child(main);

        let mut attached = Element::new("attachedArtifacts");
        for attached_artifact in attached_artifacts {
            let mut element =
                artifact_element("artifact", attached_artifact, self.extensions.as_ref());
            element.add_child(file_element("file", attached_artifact.file.as_deref())?);
            attached.add_child(element);
        }
        root.add_child(attached);

        self.reporter.append(root)?;
        Ok(true)
    }
}

/// Reports a failed project build with the causing exception.
pub struct ProjectFailedHandler {
    reporter: Arc<dyn EventReporter>,
}

impl ProjectFailedHandler {
    /// Create the handler with its report sink.
    #[must_use]
    pub fn new(reporter: Arc<dyn EventReporter>) -> Self {
        Self { reporter }
    }
}

impl EventHandler for ProjectFailedHandler {
    fn name(&self) -> &'static str {
        "project-failed"
    }

    fn supported_kind(&self) -> Option<EventKind> {
        Some(EventKind::ProjectFailed)
    }

    fn handle(&self, event: &BuildEvent) -> Result<bool> {
        let BuildEvent::ProjectFailed { project, failure } = event else {
            return Ok(false);
        };
        let mut root = execution_event_element(EventKind::ProjectFailed);
        root.add_child(project_element("project", project)?);
        root.add_child(failure_element("exception", failure));
        self.reporter.append(root)?;
        Ok(true)
    }
}
