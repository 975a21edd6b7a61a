//! Read-only payload models carried by build events.
//!
//! Mirrors of the build tool's domain objects as the spy sees them:
//! project coordinates and layout, declared plugins, mojo executions,
//! artifacts, failures, and resolved dependencies. Plain data throughout,
//! serde camelCase on the wire.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::xml::Element;

// ─────────────────────────────────────────────────────────────────────────────
// Project
// ─────────────────────────────────────────────────────────────────────────────

/// Coordinates and layout of a project/module being built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectModel {
    /// Human-readable project name.
    pub name: String,
    /// Group coordinate.
    pub group_id: String,
    /// Artifact coordinate.
    pub artifact_id: String,
    /// Declared version.
    pub version: String,
    /// Packaging id (`jar`, `pom`, `war`, …).
    pub packaging: String,
    /// Project base directory, when the project is on disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
    /// Backing descriptor file, possibly a build-time alias of `pom.xml`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Build section, when declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<BuildModel>,
    /// Plugins declared in the build section.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub build_plugins: Vec<PluginModel>,
}

/// Build section of a project descriptor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildModel {
    /// Build directory (`target`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    /// Compiled-classes output directory (`target/classes`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_directory: Option<String>,
    /// Main source root (`src/main/java`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_directory: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Plugins
// ─────────────────────────────────────────────────────────────────────────────

/// A build plugin declared in the project descriptor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginModel {
    /// Group coordinate.
    pub group_id: String,
    /// Artifact coordinate.
    pub artifact_id: String,
    /// Declared version, when pinned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Plugin-level configuration subtree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Element>,
    /// Declared executions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub executions: Vec<PluginExecutionModel>,
}

impl PluginModel {
    /// `groupId:artifactId` key used for plugin lookups.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

/// One declared execution of a build plugin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginExecutionModel {
    /// Execution id.
    pub id: String,
    /// Goals bound by this execution.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub goals: Vec<String>,
    /// Execution-level configuration subtree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Element>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Mojo executions
// ─────────────────────────────────────────────────────────────────────────────

/// A single plugin-goal execution within a project build.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MojoExecutionModel {
    /// Plugin group coordinate.
    pub group_id: String,
    /// Plugin artifact coordinate.
    pub artifact_id: String,
    /// Plugin version.
    pub version: String,
    /// Goal being executed.
    pub goal: String,
    /// Execution id.
    pub execution_id: String,
    /// Lifecycle phase the goal is bound to, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_phase: Option<String>,
    /// Effective configuration of this execution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Element>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Artifacts
// ─────────────────────────────────────────────────────────────────────────────

/// Coordinates and resolution state of a produced or resolved artifact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactModel {
    /// Group coordinate.
    pub group_id: String,
    /// Artifact coordinate.
    pub artifact_id: String,
    /// Version as declared, before snapshot timestamp resolution.
    pub base_version: String,
    /// Resolved version.
    pub version: String,
    /// Whether this is a snapshot version.
    pub snapshot: bool,
    /// Classifier, when the artifact carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    /// Artifact type (`jar`, `pom`, `test-jar`, …).
    #[serde(rename = "type")]
    pub artifact_type: String,
    /// On-disk file, once produced or resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl ArtifactModel {
    /// Synthesized identifier:
    /// `groupId:artifactId:type[:classifier]:baseVersion`.
    #[must_use]
    pub fn id(&self) -> String {
        match &self.classifier {
            Some(classifier) => format!(
                "{}:{}:{}:{classifier}:{}",
                self.group_id, self.artifact_id, self.artifact_type, self.base_version
            ),
            None => format!(
                "{}:{}:{}:{}",
                self.group_id, self.artifact_id, self.artifact_type, self.base_version
            ),
        }
    }
}

/// A dependency resolved for a project, with its resolution scope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDependency {
    /// The resolved artifact.
    pub artifact: ArtifactModel,
    /// Dependency scope (`compile`, `test`, …).
    pub scope: String,
    /// Whether the dependency is declared optional.
    pub optional: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Failures
// ─────────────────────────────────────────────────────────────────────────────

/// A failure raised by the build runtime, as captured for the report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureInfo {
    /// Fully-qualified type name of the failure.
    pub type_name: String,
    /// Failure message, when present. May contain terminal color codes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Full stack trace text. May contain terminal color codes.
    pub stack_trace: String,
}
