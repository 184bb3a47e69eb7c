//! Environment access and platform detection.

use std::collections::HashMap;

use super::constants::PLATFORM_MARKERS;

/// Read-only view of environment variables.
pub trait EnvSource {
    /// Value of `key`, or `None` when unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Whether the process runs on the managed platform.
pub fn is_managed_platform(env: &impl EnvSource) -> bool {
    PLATFORM_MARKERS
        .iter()
        .any(|marker| lookup(env, marker).is_some())
}

/// First non-empty value among `names`, checked left to right.
pub fn first_non_empty_opt(env: &impl EnvSource, names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| lookup(env, name))
}

/// First non-empty value among `names`, or `default`.
pub fn first_non_empty(env: &impl EnvSource, names: &[&str], default: &str) -> String {
    first_non_empty_opt(env, names).unwrap_or_else(|| default.to_string())
}

/// First non-empty value among `names` parsed as `T`; `default` when absent or unparsable.
pub fn first_parsed<T: std::str::FromStr>(env: &impl EnvSource, names: &[&str], default: T) -> T {
    first_non_empty_opt(env, names)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn lookup(env: &impl EnvSource, name: &str) -> Option<String> {
    env.var(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_no_markers_means_local() {
        assert!(!is_managed_platform(&env(&[])));
    }

    #[test]
    fn test_any_marker_means_platform() {
        assert!(is_managed_platform(&env(&[("RAILWAY_ENVIRONMENT", "production")])));
        assert!(is_managed_platform(&env(&[("RAILWAY_PROJECT_ID", "abc")])));
    }

    #[test]
    fn test_blank_marker_is_ignored() {
        assert!(!is_managed_platform(&env(&[("RAILWAY_ENVIRONMENT", "  ")])));
    }

    #[test]
    fn test_first_non_empty_order() {
        let e = env(&[("A", ""), ("B", "second"), ("C", "third")]);
        assert_eq!(first_non_empty(&e, &["A", "B", "C"], "default"), "second");
        assert_eq!(first_non_empty(&e, &["C", "B"], "default"), "third");
        assert_eq!(first_non_empty(&e, &["X", "Y"], "default"), "default");
    }

    #[test]
    fn test_first_parsed_falls_back_on_garbage() {
        let e = env(&[("PORT", "not-a-port")]);
        assert_eq!(first_parsed(&e, &["PORT"], 8000u16), 8000);

        let e = env(&[("PORT", "9000")]);
        assert_eq!(first_parsed(&e, &["PORT"], 8000u16), 9000);
    }
}
