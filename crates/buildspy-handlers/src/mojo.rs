//! Handlers for plugin-goal execution boundaries.

use std::sync::Arc;

use buildspy_core::{BuildEvent, EventKind};
use buildspy_report::EventReporter;

use crate::elements::{
    execution_event_element, failure_element, plugin_element, project_element,
};
use crate::errors::Result;
use crate::handler::EventHandler;

/// Configuration parameters copied into the report for finished goal
/// executions. The downstream aggregator reads test-report locations
/// from `reportsDirectory`.
const FINISHED_MOJO_PARAMETERS: &[&str] = &["reportsDirectory"];

/// Reports the start of a plugin-goal execution.
pub struct MojoStartedHandler {
    reporter: Arc<dyn EventReporter>,
}

impl MojoStartedHandler {
    /// Create the handler with its report sink.
    #[must_use]
    pub fn new(reporter: Arc<dyn EventReporter>) -> Self {
        Self { reporter }
    }
}

impl EventHandler for MojoStartedHandler {
    fn name(&self) -> &'static str {
        "mojo-started"
    }

    fn supported_kind(&self) -> Option<EventKind> {
        Some(EventKind::MojoStarted)
    }

    fn handle(&self, event: &BuildEvent) -> Result<bool> {
        let BuildEvent::MojoStarted { project, mojo } = event else {
            return Ok(false);
        };
        let mut root = execution_event_element(EventKind::MojoStarted);
        root.add_child(project_element("project", project)?);
        root.add_child(plugin_element("plugin", mojo, &[]));
        self.reporter.append(root)?;
        Ok(true)
    }
}

/// Reports a successful plugin-goal execution, copying the reported
/// configuration parameters.
pub struct MojoSucceededHandler {
    reporter: Arc<dyn EventReporter>,
}

impl MojoSucceededHandler {
    /// Create the handler with its report sink.
    #[must_use]
    pub fn new(reporter: Arc<dyn EventReporter>) -> Self {
        Self { reporter }
    }
}

impl EventHandler for MojoSucceededHandler {
    fn name(&self) -> &'static str {
        "mojo-succeeded"
    }

    fn supported_kind(&self) -> Option<EventKind> {
        Some(EventKind::MojoSucceeded)
    }

    fn handle(&self, event: &BuildEvent) -> Result<bool> {
        let BuildEvent::MojoSucceeded { project, mojo } = event else {
            return Ok(false);
        };
        let mut root = execution_event_element(EventKind::MojoSucceeded);
        root.add_child(project_element("project", project)?);
        root.add_child(plugin_element("plugin", mojo, FINISHED_MOJO_PARAMETERS));
        self.reporter.append(root)?;
        Ok(true)
    }
}

/// Reports a failed plugin-goal execution with the causing exception.
pub struct MojoFailedHandler {
    reporter: Arc<dyn EventReporter>,
}

impl MojoFailedHandler {
    /// Create the handler with its report sink.
    #[must_use]
    pub fn new(reporter: Arc<dyn EventReporter>) -> Self {
        Self { reporter }
    }
}

impl EventHandler for MojoFailedHandler {
    fn name(&self) -> &'static str {
        "mojo-failed"
    }

    fn supported_kind(&self) -> Option<EventKind> {
        Some(EventKind::MojoFailed)
    }

    fn handle(&self, event: &BuildEvent) -> Result<bool> {
        let BuildEvent::MojoFailed {
            project,
            mojo,
            failure,
        } = event
        else {
            return Ok(false);
        };
        let mut root = execution_event_element(EventKind::MojoFailed);
        root.add_child(project_element("project", project)?);
        root.add_child(plugin_element("plugin", mojo, FINISHED_MOJO_PARAMETERS));
        root.add_child(failure_element("exception", failure));
        self.reporter.append(root)?;
        Ok(true)
    }
}
