//! Converter configuration
//!
//! Layered with figment, lowest to highest priority:
//! 1. Built-in defaults (strict grammar)
//! 2. Optional config file (`.toml`, `.yaml`/`.yml`, `.json`)
//! 3. Environment variables prefixed `NUMCONV_` (e.g. `NUMCONV_HEX_INPUT=any_case`)

use crate::error::{NumconvError, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "NUMCONV_";

/// Letter case accepted for hexadecimal input digits
///
/// Output is always uppercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HexInputCase {
    /// `A-F` only
    #[default]
    Upper,
    /// `A-F` and `a-f`
    AnyCase,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub hex_input: HexInputCase,
    /// Emit a trace event for every successful conversion
    pub log_conversions: bool,
}

impl ConverterConfig {
    /// Load from defaults and `NUMCONV_*` environment variables
    pub fn load() -> Result<Self> {
        Self::from_figment(Self::base_figment())
    }

    /// Load with a config file layered between defaults and environment
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| NumconvError::config("Config file must have an extension"))?;

        let figment = Figment::from(Serialized::defaults(Self::default()));
        let figment = match extension {
            "toml" => figment.merge(Toml::file(path)),
            "yaml" | "yml" => figment.merge(Yaml::file(path)),
            "json" => figment.merge(Json::file(path)),
            _ => {
                return Err(NumconvError::config(format!(
                    "Unsupported config file format: {}",
                    extension
                )))
            }
        };

        Self::from_figment(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Extract from a caller-assembled figment
    pub fn from_figment(figment: Figment) -> Result<Self> {
        figment
            .extract()
            .map_err(|e| NumconvError::config(format!("Failed to load configuration: {}", e)))
    }

    fn base_figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(ENV_PREFIX))
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let config = ConverterConfig::default();
        assert_eq!(config.hex_input, HexInputCase::Upper);
        assert!(!config.log_conversions);
    }

    #[test]
    fn test_from_figment_overrides() {
        let figment = Figment::from(Serialized::defaults(ConverterConfig::default()))
            .merge(Yaml::string("hex_input: any_case\nlog_conversions: true\n"));
        let config = ConverterConfig::from_figment(figment).unwrap();
        assert_eq!(config.hex_input, HexInputCase::AnyCase);
        assert!(config.log_conversions);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let figment = Figment::from(Serialized::defaults(ConverterConfig::default()))
            .merge(Toml::string("log_conversions = true"));
        let config = ConverterConfig::from_figment(figment).unwrap();
        assert_eq!(config.hex_input, HexInputCase::Upper);
        assert!(config.log_conversions);
    }

    #[test]
    fn test_unknown_case_is_config_error() {
        let figment = Figment::from(Serialized::defaults(ConverterConfig::default()))
            .merge(Yaml::string("hex_input: lower_only\n"));
        let err = ConverterConfig::from_figment(figment).unwrap_err();
        assert!(matches!(err, NumconvError::Config(_)));
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let err = ConverterConfig::load_from_file("numconv.ini").unwrap_err();
        assert!(err.to_string().contains("Unsupported config file format"));
    }
}
