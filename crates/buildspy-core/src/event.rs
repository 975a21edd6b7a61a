//! Build-lifecycle event model.
//!
//! [`BuildEvent`] is the closed set of notifications the host build
//! runtime emits, one variant per lifecycle occurrence, each carrying its
//! read-only payload. [`EventKind`] is the fieldless discriminant that
//! handlers declare and the registry keys on; the two always agree via
//! [`BuildEvent::kind`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{
    ArtifactModel, FailureInfo, MojoExecutionModel, ProjectModel, ResolvedDependency,
};

// ─────────────────────────────────────────────────────────────────────────────
// EventKind
// ─────────────────────────────────────────────────────────────────────────────

/// Discriminant of a build-lifecycle event.
///
/// Serialized with the build tool's own type names (`ProjectStarted`,
/// `MojoFailed`, …), which also appear verbatim in the report's `type`
/// attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// The build session began.
    SessionStarted,
    /// The build session finished, successfully or not.
    SessionEnded,
    /// A project/module build began.
    ProjectStarted,
    /// A project/module build succeeded.
    ProjectSucceeded,
    /// A project/module build failed.
    ProjectFailed,
    /// A project/module build was skipped.
    ProjectSkipped,
    /// A plugin-goal execution began.
    MojoStarted,
    /// A plugin-goal execution succeeded.
    MojoSucceeded,
    /// A plugin-goal execution failed.
    MojoFailed,
    /// A plugin-goal execution was skipped.
    MojoSkipped,
    /// Dependency resolution was requested for a project.
    DependencyResolutionStarted,
    /// Dependency resolution finished for a project.
    DependencyResolutionCompleted,
}

impl EventKind {
    /// All kinds, in lifecycle order.
    #[must_use]
    pub fn all() -> &'static [EventKind] {
        &[
            EventKind::SessionStarted,
            EventKind::SessionEnded,
            EventKind::ProjectStarted,
            EventKind::ProjectSucceeded,
            EventKind::ProjectFailed,
            EventKind::ProjectSkipped,
            EventKind::MojoStarted,
            EventKind::MojoSucceeded,
            EventKind::MojoFailed,
            EventKind::MojoSkipped,
            EventKind::DependencyResolutionStarted,
            EventKind::DependencyResolutionCompleted,
        ]
    }

    /// Whether this kind marks an execution boundary (session, project, or
    /// goal), as opposed to a dependency-resolution notification.
    ///
    /// The fallback handler serializes execution kinds only.
    #[must_use]
    pub fn is_execution(self) -> bool {
        !matches!(
            self,
            EventKind::DependencyResolutionStarted | EventKind::DependencyResolutionCompleted
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::SessionStarted => "SessionStarted",
            EventKind::SessionEnded => "SessionEnded",
            EventKind::ProjectStarted => "ProjectStarted",
            EventKind::ProjectSucceeded => "ProjectSucceeded",
            EventKind::ProjectFailed => "ProjectFailed",
            EventKind::ProjectSkipped => "ProjectSkipped",
            EventKind::MojoStarted => "MojoStarted",
            EventKind::MojoSucceeded => "MojoSucceeded",
            EventKind::MojoFailed => "MojoFailed",
            EventKind::MojoSkipped => "MojoSkipped",
            EventKind::DependencyResolutionStarted => "DependencyResolutionStarted",
            EventKind::DependencyResolutionCompleted => "DependencyResolutionCompleted",
        };
        write!(f, "{name}")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// BuildEvent
// ─────────────────────────────────────────────────────────────────────────────

/// A build-lifecycle notification with its payload.
///
/// Owned and emitted solely by the host build runtime; immutable once
/// issued. The serde `type` tag carries the [`EventKind`] name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BuildEvent {
    /// The build session began.
    #[serde(rename_all = "camelCase")]
    SessionStarted {
        /// Top-level project of the session.
        project: ProjectModel,
    },
    /// The build session finished.
    #[serde(rename_all = "camelCase")]
    SessionEnded {
        /// Top-level project of the session.
        project: ProjectModel,
    },
    /// A project/module build began.
    #[serde(rename_all = "camelCase")]
    ProjectStarted {
        /// The project being built.
        project: ProjectModel,
    },
    /// A project/module build succeeded.
    #[serde(rename_all = "camelCase")]
    ProjectSucceeded {
        /// The project that was built.
        project: ProjectModel,
        /// The project's main artifact.
        artifact: ArtifactModel,
        /// Secondary artifacts attached during the build.
        attached_artifacts: Vec<ArtifactModel>,
    },
    /// A project/module build failed.
    #[serde(rename_all = "camelCase")]
    ProjectFailed {
        /// The project that failed.
        project: ProjectModel,
        /// The causing failure.
        failure: FailureInfo,
    },
    /// A project/module build was skipped.
    #[serde(rename_all = "camelCase")]
    ProjectSkipped {
        /// The project that was skipped.
        project: ProjectModel,
    },
    /// A plugin-goal execution began.
    #[serde(rename_all = "camelCase")]
    MojoStarted {
        /// The project the goal runs in.
        project: ProjectModel,
        /// The goal execution.
        mojo: MojoExecutionModel,
    },
    /// A plugin-goal execution succeeded.
    #[serde(rename_all = "camelCase")]
    MojoSucceeded {
        /// The project the goal ran in.
        project: ProjectModel,
        /// The goal execution.
        mojo: MojoExecutionModel,
    },
    /// A plugin-goal execution failed.
    #[serde(rename_all = "camelCase")]
    MojoFailed {
        /// The project the goal ran in.
        project: ProjectModel,
        /// The goal execution.
        mojo: MojoExecutionModel,
        /// The causing failure.
        failure: FailureInfo,
    },
    /// A plugin-goal execution was skipped.
    #[serde(rename_all = "camelCase")]
    MojoSkipped {
        /// The project the goal would have run in.
        project: ProjectModel,
        /// The goal execution.
        mojo: MojoExecutionModel,
    },
    /// Dependency resolution was requested.
    #[serde(rename_all = "camelCase")]
    DependencyResolutionStarted {
        /// The project whose dependencies are being resolved.
        project: ProjectModel,
    },
    /// Dependency resolution finished.
    #[serde(rename_all = "camelCase")]
    DependencyResolutionCompleted {
        /// Dependencies resolved, with their scopes.
        resolved_dependencies: Vec<ResolvedDependency>,
    },
}

impl BuildEvent {
    /// Discriminant of this event.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            BuildEvent::SessionStarted { .. } => EventKind::SessionStarted,
            BuildEvent::SessionEnded { .. } => EventKind::SessionEnded,
            BuildEvent::ProjectStarted { .. } => EventKind::ProjectStarted,
            BuildEvent::ProjectSucceeded { .. } => EventKind::ProjectSucceeded,
            BuildEvent::ProjectFailed { .. } => EventKind::ProjectFailed,
            BuildEvent::ProjectSkipped { .. } => EventKind::ProjectSkipped,
            BuildEvent::MojoStarted { .. } => EventKind::MojoStarted,
            BuildEvent::MojoSucceeded { .. } => EventKind::MojoSucceeded,
            BuildEvent::MojoFailed { .. } => EventKind::MojoFailed,
            BuildEvent::MojoSkipped { .. } => EventKind::MojoSkipped,
            BuildEvent::DependencyResolutionStarted { .. } => {
                EventKind::DependencyResolutionStarted
            }
            BuildEvent::DependencyResolutionCompleted { .. } => {
                EventKind::DependencyResolutionCompleted
            }
        }
    }

    /// Project attached to this event, when the kind carries one.
    #[must_use]
    pub fn project(&self) -> Option<&ProjectModel> {
        match self {
            BuildEvent::SessionStarted { project }
            | BuildEvent::SessionEnded { project }
            | BuildEvent::ProjectStarted { project }
            | BuildEvent::ProjectSucceeded { project, .. }
            | BuildEvent::ProjectFailed { project, .. }
            | BuildEvent::ProjectSkipped { project }
            | BuildEvent::MojoStarted { project, .. }
            | BuildEvent::MojoSucceeded { project, .. }
            | BuildEvent::MojoFailed { project, .. }
            | BuildEvent::MojoSkipped { project, .. }
            | BuildEvent::DependencyResolutionStarted { project } => Some(project),
            BuildEvent::DependencyResolutionCompleted { .. } => None,
        }
    }

    /// Mojo execution attached to this event, when the kind carries one.
    #[must_use]
    pub fn mojo(&self) -> Option<&MojoExecutionModel> {
        match self {
            BuildEvent::MojoStarted { mojo, .. }
            | BuildEvent::MojoSucceeded { mojo, .. }
            | BuildEvent::MojoFailed { mojo, .. }
            | BuildEvent::MojoSkipped { mojo, .. } => Some(mojo),
            _ => None,
        }
    }

    /// Failure attached to this event, when the kind carries one.
    #[must_use]
    pub fn failure(&self) -> Option<&FailureInfo> {
        match self {
            BuildEvent::ProjectFailed { failure, .. }
            | BuildEvent::MojoFailed { failure, .. } => Some(failure),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
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

    fn mojo() -> MojoExecutionModel {
        MojoExecutionModel {
            group_id: "org.apache.maven.plugins".into(),
            artifact_id: "maven-surefire-plugin".into(),
            version: "3.2.5".into(),
            goal: "test".into(),
            execution_id: "default-test".into(),
            lifecycle_phase: Some("test".into()),
            configuration: None,
        }
    }

    fn failure() -> FailureInfo {
        FailureInfo {
            type_name: "org.apache.maven.plugin.MojoFailureException".into(),
            message: Some("boom".into()),
            stack_trace: "at org.example.Test".into(),
        }
    }

    // --- Kinds ---

    #[test]
    fn all_kinds_listed_once() {
        let kinds = EventKind::all();
        assert_eq!(kinds.len(), 12);
        for (i, kind) in kinds.iter().enumerate() {
            assert!(!kinds[i + 1..].contains(kind));
        }
    }

    #[test]
    fn kind_matches_variant() {
        let cases: Vec<(BuildEvent, EventKind)> = vec![
            (
                BuildEvent::SessionStarted { project: project() },
                EventKind::SessionStarted,
            ),
            (
                BuildEvent::SessionEnded { project: project() },
                EventKind::SessionEnded,
            ),
            (
                BuildEvent::ProjectStarted { project: project() },
                EventKind::ProjectStarted,
            ),
            (
                BuildEvent::ProjectFailed {
                    project: project(),
                    failure: failure(),
                },
                EventKind::ProjectFailed,
            ),
            (
                BuildEvent::MojoStarted {
                    project: project(),
                    mojo: mojo(),
                },
                EventKind::MojoStarted,
            ),
            (
                BuildEvent::DependencyResolutionCompleted {
                    resolved_dependencies: Vec::new(),
                },
                EventKind::DependencyResolutionCompleted,
            ),
        ];
        for (event, kind) in cases {
            assert_eq!(event.kind(), kind);
        }
    }

    #[test]
    fn display_matches_serde_name() {
        for kind in EventKind::all() {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.to_string()));
        }
    }

    #[test]
    fn execution_kinds_exclude_dependency_resolution() {
        assert!(EventKind::SessionStarted.is_execution());
        assert!(EventKind::MojoFailed.is_execution());
        assert!(!EventKind::DependencyResolutionStarted.is_execution());
        assert!(!EventKind::DependencyResolutionCompleted.is_execution());
    }

    // --- Accessors ---

    #[test]
    fn project_accessor_covers_execution_events() {
        let event = BuildEvent::MojoSkipped {
            project: project(),
            mojo: mojo(),
        };
        assert_eq!(event.project().map(|p| p.artifact_id.as_str()), Some("app"));

        let event = BuildEvent::DependencyResolutionCompleted {
            resolved_dependencies: Vec::new(),
        };
        assert!(event.project().is_none());
    }

    #[test]
    fn failure_accessor_covers_failed_events() {
        let event = BuildEvent::MojoFailed {
            project: project(),
            mojo: mojo(),
            failure: failure(),
        };
        assert!(event.failure().is_some());
        assert!(event.mojo().is_some());

        let event = BuildEvent::ProjectStarted { project: project() };
        assert!(event.failure().is_none());
        assert!(event.mojo().is_none());
    }

    // --- Serde ---

    #[test]
    fn events_tag_with_kind_name() {
        let event = BuildEvent::ProjectStarted { project: project() };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "ProjectStarted");
        assert_eq!(value["project"]["groupId"], "com.example");
    }

    #[test]
    fn event_fields_are_camel_case() {
        let event = BuildEvent::ProjectSucceeded {
            project: project(),
            artifact: ArtifactModel {
                group_id: "com.example".into(),
                artifact_id: "app".into(),
                base_version: "1.0".into(),
                version: "1.0".into(),
                snapshot: false,
                classifier: None,
                artifact_type: "jar".into(),
                file: None,
            },
            attached_artifacts: Vec::new(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert!(value.get("attachedArtifacts").is_some());
    }

    #[test]
    fn event_round_trip() {
        let event = BuildEvent::MojoFailed {
            project: project(),
            mojo: mojo(),
            failure: failure(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: BuildEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
