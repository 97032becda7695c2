//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Listen address and asset paths are not handled here: they come from
//! `[package.metadata.leptos]` and the `LEPTOS_*` variables.

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid boolean for {key}: {value:?}")]
    InvalidBool { key: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directive, e.g. `info,tower_http=debug`
    pub log_filter: String,

    /// Compress responses with brotli/gzip
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let compression = match lookup("ENABLE_COMPRESSION") {
            Some(value) => parse_bool("ENABLE_COMPRESSION", &value)?,
            None => true,
        };

        Ok(Self {
            log_filter,
            compression,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            compression: true,
        }
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // ========================================================================
    // Config Lookup Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, "info");
        assert!(config.compression);
    }

    #[test]
    fn test_log_filter_from_rust_log() {
        let config =
            Config::from_lookup(lookup_from(&[("RUST_LOG", "debug,tower_http=trace")])).unwrap();
        assert_eq!(config.log_filter, "debug,tower_http=trace");
    }

    #[test]
    fn test_blank_log_filter_uses_default() {
        let config = Config::from_lookup(lookup_from(&[("RUST_LOG", "  ")])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_compression_disabled() {
        for value in ["false", "0", "no", "OFF", " False "] {
            let config =
                Config::from_lookup(lookup_from(&[("ENABLE_COMPRESSION", value)])).unwrap();
            assert!(!config.compression, "value {value:?}");
        }
    }

    #[test]
    fn test_compression_enabled() {
        for value in ["true", "1", "yes", "On"] {
            let config =
                Config::from_lookup(lookup_from(&[("ENABLE_COMPRESSION", value)])).unwrap();
            assert!(config.compression, "value {value:?}");
        }
    }

    #[test]
    fn test_invalid_compression_value() {
        let err = Config::from_lookup(lookup_from(&[("ENABLE_COMPRESSION", "maybe")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBool {
                key: "ENABLE_COMPRESSION",
                value: "maybe".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid boolean for ENABLE_COMPRESSION: \"maybe\""
        );
    }
}
