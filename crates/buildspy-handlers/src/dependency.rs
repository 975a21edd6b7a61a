//! Handlers for dependency-resolution notifications.

use std::sync::Arc;

use buildspy_core::extensions::ExtensionResolver;
use buildspy_core::{BuildEvent, Element, EventKind};
use buildspy_report::EventReporter;

use crate::elements::artifact_element;
use crate::errors::Result;
use crate::handler::EventHandler;

/// Consumes the resolution-started notification without generating a
/// report entry.
#[derive(Clone, Copy, Debug, Default)]
pub struct DependencyResolutionStartedHandler;

impl DependencyResolutionStartedHandler {
    /// Create the handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EventHandler for DependencyResolutionStartedHandler {
    fn name(&self) -> &'static str {
        "dependency-resolution-started"
    }

    fn supported_kind(&self) -> Option<EventKind> {
        Some(EventKind::DependencyResolutionStarted)
    }

    fn handle(&self, event: &BuildEvent) -> Result<bool> {
        Ok(matches!(
            event,
            BuildEvent::DependencyResolutionStarted { .. }
        ))
    }
}

/// Reports the outcome of dependency resolution: every resolved
/// dependency with its coordinates, scope, and optional flag.
pub struct DependencyResolutionCompletedHandler {
    reporter: Arc<dyn EventReporter>,
    extensions: Arc<dyn ExtensionResolver>,
}

impl DependencyResolutionCompletedHandler {
    /// Create the handler with its report sink and extension table.
    #[must_use]
    pub fn new(reporter: Arc<dyn EventReporter>, extensions: Arc<dyn ExtensionResolver>) -> Self {
        Self { reporter, extensions }
    }
}

impl EventHandler for DependencyResolutionCompletedHandler {
    fn name(&self) -> &'static str {
        "dependency-resolution-completed"
    }

    fn supported_kind(&self) -> Option<EventKind> {
        Some(EventKind::DependencyResolutionCompleted)
    }

    fn handle(&self, event: &BuildEvent) -> Result<bool> {
        let BuildEvent::DependencyResolutionCompleted {
            resolved_dependencies,
        } = event
        else {
            return Ok(false);
        };

        let mut root = Element::new("DependencyResolutionResult");
        let mut resolved = Element::new("resolvedDependencies");
        for dependency in resolved_dependencies {
            let mut element =
                artifact_element("dependency", &dependency.artifact, self.extensions.as_ref());
            element.set_attribute("scope", &dependency.scope);
            element.set_attribute("optional", if dependency.optional { "true" } else { "false" });
            resolved.add_child(element);
        }
        root.add_child(resolved);

        self.reporter.append(root)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use buildspy_core::extensions::StandardExtensions;
    use buildspy_core::model::{ArtifactModel, ProjectModel, ResolvedDependency};
    use buildspy_report::BufferReporter;

    use super::*;

    fn dependency(artifact_id: &str, scope: &str, optional: bool) -> ResolvedDependency {
        ResolvedDependency {
            artifact: ArtifactModel {
                group_id: "org.slf4j".into(),
                artifact_id: artifact_id.into(),
                base_version: "2.0.13".into(),
                version: "2.0.13".into(),
                snapshot: false,
                classifier: None,
                artifact_type: "jar".into(),
                file: None,
            },
            scope: scope.into(),
            optional,
        }
    }

    #[test]
    fn resolution_started_is_a_silent_consume() {
        let handler = DependencyResolutionStartedHandler::new();
        let project = ProjectModel {
            name: "Example App".into(),
            group_id: "com.example".into(),
            artifact_id: "app".into(),
            version: "1.0".into(),
            packaging: "jar".into(),
            base_dir: None,
            file: None,
            build: None,
            build_plugins: Vec::new(),
        };
        let consumed = handler
            .handle(&BuildEvent::DependencyResolutionStarted { project })
            .unwrap();
        assert!(consumed);
    }

    #[test]
    fn completed_reports_each_resolved_dependency() {
        let reporter = Arc::new(BufferReporter::new());
        let handler = DependencyResolutionCompletedHandler::new(
            reporter.clone(),
            Arc::new(StandardExtensions),
        );
        let consumed = handler
            .handle(&BuildEvent::DependencyResolutionCompleted {
                resolved_dependencies: vec![
                    dependency("slf4j-api", "compile", false),
                    dependency("slf4j-simple", "test", true),
                ],
            })
            .unwrap();
        assert!(consumed);

        let elements = reporter.elements();
        assert_eq!(elements.len(), 1);
        let root = &elements[0];
        assert_eq!(root.name(), "DependencyResolutionResult");

        let resolved = root.child("resolvedDependencies").unwrap();
        assert_eq!(resolved.children().len(), 2);

        let api = &resolved.children()[0];
        assert_eq!(api.name(), "dependency");
        assert_eq!(api.attribute("artifactId"), Some("slf4j-api"));
        assert_eq!(api.attribute("scope"), Some("compile"));
        assert_eq!(api.attribute("optional"), Some("false"));
        assert_eq!(api.attribute("extension"), Some("jar"));

        let simple = &resolved.children()[1];
        assert_eq!(simple.attribute("scope"), Some("test"));
        assert_eq!(simple.attribute("optional"), Some("true"));
    }

    #[test]
    fn completed_with_no_dependencies_emits_empty_list() {
        let reporter = Arc::new(BufferReporter::new());
        let handler = DependencyResolutionCompletedHandler::new(
            reporter.clone(),
            Arc::new(StandardExtensions),
        );
        let consumed = handler
            .handle(&BuildEvent::DependencyResolutionCompleted {
                resolved_dependencies: Vec::new(),
            })
            .unwrap();
        assert!(consumed);

        let elements = reporter.elements();
        let resolved = elements[0].child("resolvedDependencies").unwrap();
        assert!(resolved.children().is_empty());
    }
}
