//! Environment-driven spy configuration.

use std::env;
use std::path::PathBuf;

use tracing::debug;

/// Environment variable disabling report emission entirely.
pub const DISABLED_VAR: &str = "BUILDSPY_DISABLED";

/// Environment variable overriding the reports directory.
pub const REPORTS_DIR_VAR: &str = "BUILDSPY_REPORTS_DIR";

const DEFAULT_REPORTS_DIR: &str = "target";

/// Runtime configuration of the spy.
///
/// Invalid environment values never fail construction; they are reported
/// at debug level and the default is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpyConfig {
    /// Whether the spy writes a report at all.
    pub enabled: bool,
    /// Directory the file reporter writes into.
    pub reports_dir: PathBuf,
}

impl Default for SpyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            reports_dir: PathBuf::from(DEFAULT_REPORTS_DIR),
        }
    }
}

impl SpyConfig {
    /// Read configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read configuration through `lookup`.
    ///
    /// Production goes through [`from_env`](Self::from_env); tests inject
    /// a closure instead of mutating the process environment.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(DISABLED_VAR) {
            match parse_switch(&raw) {
                Some(disabled) => config.enabled = !disabled,
                None => debug!(
                    variable = DISABLED_VAR,
                    value = %raw,
                    "unrecognized switch value, keeping default"
                ),
            }
        }

        if let Some(raw) = lookup(REPORTS_DIR_VAR) {
            if raw.is_empty() {
                debug!(
                    variable = REPORTS_DIR_VAR,
                    "empty reports directory, keeping default"
                );
            } else {
                config.reports_dir = PathBuf::from(raw);
            }
        }

        config
    }
}

fn parse_switch(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_enabled_into_target() {
        let config = SpyConfig::from_lookup(|_| None);
        assert!(config.enabled);
        assert_eq!(config.reports_dir, PathBuf::from("target"));
        assert_eq!(config, SpyConfig::default());
    }

    #[test]
    fn disabled_switch_accepts_bool_ish_values() {
        for value in ["1", "true", "TRUE", "yes", "On"] {
            let config =
                SpyConfig::from_lookup(|name| (name == DISABLED_VAR).then(|| value.to_string()));
            assert!(!config.enabled, "value {value:?} should disable the spy");
        }
    }

    #[test]
    fn negative_switch_values_keep_the_spy_enabled() {
        for value in ["0", "false", "no", "OFF"] {
            let config =
                SpyConfig::from_lookup(|name| (name == DISABLED_VAR).then(|| value.to_string()));
            assert!(config.enabled, "value {value:?} should keep the spy enabled");
        }
    }

    #[test]
    fn unrecognized_switch_value_keeps_the_default() {
        let config =
            SpyConfig::from_lookup(|name| (name == DISABLED_VAR).then(|| "maybe".to_string()));
        assert!(config.enabled);
    }

    #[test]
    fn reports_dir_override_applies() {
        let config = SpyConfig::from_lookup(|name| match name {
            REPORTS_DIR_VAR => Some("/var/build/reports".into()),
            _ => None,
        });
        assert_eq!(config.reports_dir, PathBuf::from("/var/build/reports"));
        assert!(config.enabled);
    }

    #[test]
    fn empty_reports_dir_keeps_the_default() {
        let config = SpyConfig::from_lookup(|name| match name {
            REPORTS_DIR_VAR => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.reports_dir, PathBuf::from("target"));
    }

    #[test]
    fn both_variables_apply_together() {
        let config = SpyConfig::from_lookup(|name| match name {
            DISABLED_VAR => Some("true".into()),
            REPORTS_DIR_VAR => Some("out".into()),
            _ => None,
        });
        assert!(!config.enabled);
        assert_eq!(config.reports_dir, PathBuf::from("out"));
    }
}
