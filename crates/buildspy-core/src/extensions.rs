//! Artifact-type to file-extension resolution.
//!
//! The build tool maps artifact types to on-disk extensions through
//! registered type handlers (a `test-jar` artifact is a `.jar` file on
//! disk). The resolver is a seam so the host can supply its full handler
//! table; [`StandardExtensions`] covers the stock types.

/// Resolves an artifact type to its on-disk file extension.
pub trait ExtensionResolver: Send + Sync {
    /// Extension registered for `artifact_type`, or `None` when no handler
    /// covers it. Callers fall back to the raw type string.
    fn extension_of(&self, artifact_type: &str) -> Option<&str>;
}

/// The build tool's stock type-to-extension table.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardExtensions;

impl ExtensionResolver for StandardExtensions {
    fn extension_of(&self, artifact_type: &str) -> Option<&str> {
        match artifact_type {
            "pom" => Some("pom"),
            "jar" | "test-jar" | "maven-plugin" | "ejb" | "ejb-client" | "java-source"
            | "javadoc" => Some("jar"),
            "war" => Some("war"),
            "ear" => Some("ear"),
            "rar" => Some("rar"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_types_resolve() {
        let resolver = StandardExtensions;
        assert_eq!(resolver.extension_of("jar"), Some("jar"));
        assert_eq!(resolver.extension_of("pom"), Some("pom"));
        assert_eq!(resolver.extension_of("war"), Some("war"));
    }

    #[test]
    fn packed_types_resolve_to_jar() {
        let resolver = StandardExtensions;
        assert_eq!(resolver.extension_of("test-jar"), Some("jar"));
        assert_eq!(resolver.extension_of("maven-plugin"), Some("jar"));
        assert_eq!(resolver.extension_of("javadoc"), Some("jar"));
    }

    #[test]
    fn unknown_type_is_none() {
        assert_eq!(StandardExtensions.extension_of("nar"), None);
    }
}
