//! Field-to-tree element builders shared by the concrete handlers.
//!
//! Each builder reads one slice of an event payload (project coordinates,
//! plugin execution, artifact, failure) and produces the corresponding
//! report element. Builders are pure per call and never retain the
//! elements they hand out.
//!
//! Project descriptors need special care: build-time rewriting tools run
//! the build against an alias of the conventional `pom.xml` (a flattened
//! or git-versioned or dependency-reduced copy), and downstream consumers
//! key on the conventional name. [`normalize_descriptor_path`] maps known
//! aliases back to `pom.xml` before the path is reported.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use buildspy_core::extensions::ExtensionResolver;
use buildspy_core::model::{ArtifactModel, FailureInfo, MojoExecutionModel, ProjectModel};
use buildspy_core::text::strip_ansi;
use buildspy_core::{Element, EventKind};
use tracing::warn;

use crate::errors::{HandlerError, Result};

/// Conventional project descriptor filename.
pub const DESCRIPTOR: &str = "pom.xml";
/// Descriptor alias written by the flatten plugin with default settings.
pub const FLATTENED_ALIAS: &str = ".flattened-pom.xml";
/// Descriptor alias written by the git-versioning extension.
pub const GIT_VERSIONED_ALIAS: &str = ".git-versioned-pom.xml";
/// Descriptor alias written by the shade plugin.
pub const DEPENDENCY_REDUCED_ALIAS: &str = "dependency-reduced-pom.xml";

const FLATTEN_PLUGIN_KEY: &str = "org.codehaus.mojo:flatten-maven-plugin";
const FLATTEN_GOAL: &str = "flatten";
const FLATTENED_FILENAME_PARAM: &str = "flattenedPomFilename";

/// Canonicalize `path`, wrapping failures with the offending path.
///
/// # Errors
///
/// Returns [`HandlerError::Canonicalize`] when the path does not exist or
/// cannot be resolved.
pub fn canonical_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|source| HandlerError::Canonicalize {
        path: path.to_path_buf(),
        source,
    })
}

/// Root element for an execution event, carrying the kind name in its
/// `type` attribute.
#[must_use]
pub fn execution_event_element(kind: EventKind) -> Element {
    let mut element = Element::new("ExecutionEvent");
    element.set_attribute("type", kind.to_string());
    element
}

/// Project element: coordinates as attributes, canonicalized `baseDir`
/// and alias-normalized `file` paths when present, and a `build` child
/// when the project declares a build section.
///
/// # Errors
///
/// Returns [`HandlerError::Canonicalize`] when the base directory or the
/// descriptor file cannot be canonicalized.
pub fn project_element(name: &str, project: &ProjectModel) -> Result<Element> {
    let mut element = Element::new(name);
    element.set_attribute("name", &project.name);
    element.set_attribute("groupId", &project.group_id);
    element.set_attribute("artifactId", &project.artifact_id);
    element.set_attribute("version", &project.version);
    element.set_attribute("packaging", &project.packaging);

    if let Some(base_dir) = &project.base_dir {
        let canonical = canonical_path(base_dir)?;
        element.set_attribute("baseDir", canonical.display().to_string());
    }

    if let Some(file) = &project.file {
        let canonical = canonical_path(file)?;
        let normalized = normalize_descriptor_path(&canonical, project);
        element.set_attribute("file", normalized.display().to_string());
    }

    if let Some(build) = &project.build {
        let mut build_element = Element::new("build");
        // `directory` is reported only once the output directory is known.
        if let Some(directory) = &build.directory
            && build.output_directory.is_some()
        {
            build_element.set_attribute("directory", directory);
        }
        if let Some(source_directory) = &build.source_directory {
            build_element.set_attribute("sourceDirectory", source_directory);
        }
        element.add_child(build_element);
    }

    Ok(element)
}

/// Map a descriptor path whose filename is a known build-time alias back
/// to the conventional `pom.xml`, preserving the directory.
///
/// Unknown filenames are checked against the flattened filename declared
/// in the project's flatten-plugin configuration; a name matching neither
/// is reported once at warn level and returned unchanged.
#[must_use]
pub fn normalize_descriptor_path(path: &Path, project: &ProjectModel) -> PathBuf {
    match path.file_name().and_then(OsStr::to_str) {
        Some(DESCRIPTOR) => path.to_path_buf(),
        Some(FLATTENED_ALIAS | GIT_VERSIONED_ALIAS | DEPENDENCY_REDUCED_ALIAS) => {
            path.with_file_name(DESCRIPTOR)
        }
        Some(other) if flattened_descriptor_filename(project) == Some(other) => {
            path.with_file_name(DESCRIPTOR)
        }
        _ => {
            warn!(
                file = %path.display(),
                "unexpected project file name, problems may occur"
            );
            path.to_path_buf()
        }
    }
}

/// Flattened descriptor filename declared in the project's flatten-plugin
/// configuration, if any. Execution-scope configuration (of executions
/// bound to the `flatten` goal) is consulted before plugin-scope.
fn flattened_descriptor_filename(project: &ProjectModel) -> Option<&str> {
    for plugin in &project.build_plugins {
        if plugin.key() != FLATTEN_PLUGIN_KEY {
            continue;
        }
        for execution in &plugin.executions {
            if !execution.goals.iter().any(|goal| goal == FLATTEN_GOAL) {
                continue;
            }
            if let Some(value) =
                configuration_value(execution.configuration.as_ref(), FLATTENED_FILENAME_PARAM)
            {
                return Some(value);
            }
        }
        if let Some(value) =
            configuration_value(plugin.configuration.as_ref(), FLATTENED_FILENAME_PARAM)
        {
            return Some(value);
        }
    }
    None
}

fn configuration_value<'a>(
    configuration: Option<&'a Element>,
    parameter: &str,
) -> Option<&'a str> {
    configuration?.child(parameter)?.value()
}

/// Failure element: `class` attribute plus `message` and `stackTrace`
/// children with terminal color escapes stripped. The `message` child is
/// always present, value-less when the failure carries no message.
#[must_use]
pub fn failure_element(name: &str, failure: &FailureInfo) -> Element {
    let mut element = Element::new(name);
    element.set_attribute("class", &failure.type_name);

    let mut message = Element::new("message");
    if let Some(text) = &failure.message {
        message.set_value(strip_ansi(text));
    }
    element.add_child(message);

    let mut stack_trace = Element::new("stackTrace");
    stack_trace.set_value(strip_ansi(&failure.stack_trace));
    element.add_child(stack_trace);

    element
}

/// Artifact element: coordinates, snapshot flag as literal
/// `"true"`/`"false"`, `classifier` only when the artifact carries one,
/// the synthesized `id`, and the on-disk `extension` resolved through
/// `extensions` with the raw type as fallback.
#[must_use]
pub fn artifact_element(
    name: &str,
    artifact: &ArtifactModel,
    extensions: &dyn ExtensionResolver,
) -> Element {
    let mut element = Element::new(name);
    element.set_attribute("groupId", &artifact.group_id);
    element.set_attribute("artifactId", &artifact.artifact_id);
    element.set_attribute("baseVersion", &artifact.base_version);
    element.set_attribute("version", &artifact.version);
    element.set_attribute("snapshot", if artifact.snapshot { "true" } else { "false" });
    if let Some(classifier) = &artifact.classifier {
        element.set_attribute("classifier", classifier);
    }
    element.set_attribute("type", &artifact.artifact_type);
    element.set_attribute("id", artifact.id());
    let extension = extensions
        .extension_of(&artifact.artifact_type)
        .unwrap_or(&artifact.artifact_type);
    element.set_attribute("extension", extension);
    element
}

/// File element: the canonicalized path as text value, value-less when no
/// file is given.
///
/// # Errors
///
/// Returns [`HandlerError::Canonicalize`] when the path cannot be
/// resolved.
pub fn file_element(name: &str, file: Option<&Path>) -> Result<Element> {
    let mut element = Element::new(name);
    if let Some(path) = file {
        let canonical = canonical_path(path)?;
        element.set_value(canonical.display().to_string());
    }
    Ok(element)
}

/// Plugin element for a mojo execution: execution id, goal, plugin
/// coordinates, the lifecycle phase when known, and the configuration
/// subtrees named in `parameters` copied verbatim as children.
#[must_use]
pub fn plugin_element(name: &str, mojo: &MojoExecutionModel, parameters: &[&str]) -> Element {
    let mut element = Element::new(name);
    element.set_attribute("executionId", &mojo.execution_id);
    element.set_attribute("goal", &mojo.goal);
    element.set_attribute("groupId", &mojo.group_id);
    element.set_attribute("artifactId", &mojo.artifact_id);
    element.set_attribute("version", &mojo.version);
    if let Some(phase) = &mojo.lifecycle_phase {
        element.set_attribute("lifecyclePhase", phase);
    }
    for &parameter in parameters {
        if let Some(subtree) = mojo
            .configuration
            .as_ref()
            .and_then(|configuration| configuration.child(parameter))
        {
            element.add_child(subtree.clone());
        }
    }
    element
}
