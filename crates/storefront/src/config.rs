//! Startup configuration.
//!
//! Premium-shipping eligibility is an external input fixed at startup; where
//! it comes from is the host's business. This module reads it (and an
//! optional catalog file) from the environment or from JSON.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult};
use storefront_observability::{LogFormat, LogSettings};

pub const ENV_PREMIUM: &str = "STOREFRONT_PREMIUM";
pub const ENV_CATALOG: &str = "STOREFRONT_CATALOG";
pub const ENV_LOG_FORMAT: &str = "STOREFRONT_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Whether the shopper gets free shipping.
    pub premium: bool,
    /// JSON product file; the built-in socks catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub log: LogSettings,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            premium: true,
            catalog_path: None,
            log: LogSettings::default(),
        }
    }
}

impl StorefrontConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_PREMIUM) {
            config.premium = parse_flag(ENV_PREMIUM, &raw)?;
        }
        if let Some(path) = lookup(ENV_CATALOG).filter(|p| !p.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            config.log.format = match raw.trim().to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                other => {
                    return Err(DomainError::validation(format!(
                        "{ENV_LOG_FORMAT}: expected json or pretty, got {other:?}"
                    )));
                }
            };
        }

        Ok(config)
    }

    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json).map_err(|e| DomainError::validation(format!("config: {e}")))
    }
}

fn parse_flag(key: &str, raw: &str) -> DomainResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(DomainError::validation(format!(
            "{key}: expected a boolean, got {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_premium_with_builtin_catalog() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.premium);
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn reads_premium_flag_variants() {
        for (raw, expected) in [("false", false), ("0", false), ("YES", true), (" on ", true)] {
            let config = StorefrontConfig::from_lookup(lookup(&[(ENV_PREMIUM, raw)])).unwrap();
            assert_eq!(config.premium, expected, "raw value {raw:?}");
        }
    }

    #[test]
    fn rejects_unknown_premium_value() {
        let err = StorefrontConfig::from_lookup(lookup(&[(ENV_PREMIUM, "maybe")])).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.starts_with(ENV_PREMIUM)),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn reads_catalog_path_and_log_format() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            (ENV_CATALOG, "/tmp/mittens.json"),
            (ENV_LOG_FORMAT, "pretty"),
        ]))
        .unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/mittens.json")));
        assert_eq!(config.log.format, LogFormat::Pretty);
    }

    #[test]
    fn blank_catalog_path_is_ignored() {
        let config = StorefrontConfig::from_lookup(lookup(&[(ENV_CATALOG, "  ")])).unwrap();
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn from_json_fills_missing_fields_with_defaults() {
        let config = StorefrontConfig::from_json(r#"{"premium": false}"#).unwrap();
        assert!(!config.premium);
        assert_eq!(config.log, LogSettings::default());

        assert!(StorefrontConfig::from_json("not json").is_err());
    }
}
