//! CLI configuration via environment variables
//!
//! Cesserract uses environment variables for optional configuration.
//! Command-line flags take precedence over anything set here.

use std::env;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default to JSON diagnostic output (CESSERRACT_DIAGNOSTICS=json)
    pub default_json: bool,
    /// Log filter directive (CESSERRACT_LOG, falling back to RUST_LOG)
    pub log_filter: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            default_json: lookup("CESSERRACT_DIAGNOSTICS")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            log_filter: lookup("CESSERRACT_LOG")
                .or_else(|| lookup("RUST_LOG"))
                .filter(|v| !v.trim().is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = config(&[]);
        assert!(!config.default_json);
        assert_eq!(config.log_filter, None);
    }

    #[test]
    fn test_json_diagnostics() {
        assert!(config(&[("CESSERRACT_DIAGNOSTICS", "json")]).default_json);
        assert!(config(&[("CESSERRACT_DIAGNOSTICS", "JSON")]).default_json);
        assert!(!config(&[("CESSERRACT_DIAGNOSTICS", "human")]).default_json);
    }

    #[test]
    fn test_log_filter_precedence() {
        let both = config(&[("CESSERRACT_LOG", "trace"), ("RUST_LOG", "warn")]);
        assert_eq!(both.log_filter.as_deref(), Some("trace"));

        let fallback = config(&[("RUST_LOG", "cesserract_runtime=debug")]);
        assert_eq!(fallback.log_filter.as_deref(), Some("cesserract_runtime=debug"));

        assert_eq!(config(&[("CESSERRACT_LOG", " ")]).log_filter, None);
    }
}
