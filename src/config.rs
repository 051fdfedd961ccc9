//! YAML configuration file support for rkscan.
//!
//! One file carries the matcher tuning and the logging setup used by the
//! `rkscan` binary. Every field except `version` is optional.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # rkscan configuration
//! version: "1.0"
//! name: "coursework"
//!
//! matcher:
//!   window_size: 5
//!   partial_ratio: 0.6
//!   trace_limit: 20
//!   hash_strategy: "rolling"
//!   hash:
//!     base: 256
//!     prime: 101
//!   max_tokens: 200000
//!
//! logging:
//!   level: "info"
//!   json: false
//! ```

use std::fs;
use std::path::Path;

use matcher::MatchConfig;
use rolling::{HashParams, HashStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct RkscanConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Matcher configuration
    #[serde(default)]
    pub matcher: MatcherYamlConfig,

    /// Logging configuration for the binary
    #[serde(default)]
    pub logging: LoggingYamlConfig,
}

impl RkscanConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: RkscanConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Build the matcher configuration this file describes.
    pub fn match_config(&self) -> Result<MatchConfig, ConfigLoadError> {
        self.matcher.to_match_config()
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.matcher.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

impl Default for RkscanConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            matcher: MatcherYamlConfig::default(),
            logging: LoggingYamlConfig::default(),
        }
    }
}

/// Hash parameters as written in YAML, validated on conversion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HashYamlConfig {
    #[serde(default = "default_base")]
    pub base: u64,

    #[serde(default = "default_prime")]
    pub prime: u64,
}

impl Default for HashYamlConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            prime: default_prime(),
        }
    }
}

/// Matcher YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatcherYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_window_size")]
    pub window_size: usize,

    #[serde(default = "default_partial_ratio")]
    pub partial_ratio: f64,

    #[serde(default = "default_trace_limit")]
    pub trace_limit: usize,

    #[serde(default)]
    pub hash: HashYamlConfig,

    #[serde(default)]
    pub hash_strategy: HashStrategy,

    #[serde(default)]
    pub max_tokens: Option<usize>,
}

impl MatcherYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.to_match_config().map(|_| ())
    }

    fn to_match_config(&self) -> Result<MatchConfig, ConfigLoadError> {
        let hash = HashParams::new(self.hash.base, self.hash.prime)
            .map_err(|e| ConfigLoadError::Validation(format!("matcher.hash: {e}")))?;

        let cfg = MatchConfig {
            version: self.version,
            window_size: self.window_size,
            partial_ratio: self.partial_ratio,
            trace_limit: self.trace_limit,
            hash,
            hash_strategy: self.hash_strategy,
            max_tokens: self.max_tokens,
        };
        cfg.validate()
            .map_err(|e| ConfigLoadError::Validation(format!("matcher: {e}")))?;
        Ok(cfg)
    }
}

impl Default for MatcherYamlConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            window_size: default_window_size(),
            partial_ratio: default_partial_ratio(),
            trace_limit: default_trace_limit(),
            hash: HashYamlConfig::default(),
            hash_strategy: HashStrategy::default(),
            max_tokens: None,
        }
    }
}

/// Logging YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingYamlConfig {
    /// `tracing` env-filter directive, e.g. `"info"` or `"matcher=trace"`.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl LoggingYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.level.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "logging.level must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingYamlConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_version() -> u32 {
    1
}
fn default_window_size() -> usize {
    crate::DEFAULT_WINDOW_SIZE
}
fn default_partial_ratio() -> f64 {
    0.6
}
fn default_trace_limit() -> usize {
    20
}
fn default_base() -> u64 {
    rolling::BASE
}
fn default_prime() -> u64 {
    rolling::PRIME
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
matcher:
  window_size: 3
  partial_ratio: 0.5
logging:
  level: "debug"
"#;

        let config = RkscanConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.name, Some("test config".to_string()));
        assert_eq!(config.matcher.window_size, 3);
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.json);

        let cfg = config.match_config().unwrap();
        assert_eq!(cfg.window_size, 3);
        assert_eq!(cfg.partial_ratio, 0.5);
        assert_eq!(cfg.trace_limit, 20);
        assert_eq!(cfg.hash, HashParams::default());
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1.0"
matcher:
  hash_strategy: "recompute"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = RkscanConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.matcher.hash_strategy, HashStrategy::Recompute);
    }

    #[test]
    fn test_missing_file() {
        let result = RkscanConfig::from_file("/nonexistent/rkscan.yaml");
        assert!(matches!(result, Err(ConfigLoadError::FileRead(_))));
    }

    #[test]
    fn test_default_config() {
        let config = RkscanConfig::default();
        assert_eq!(config.version, "1.0");
        assert!(config.name.is_none());
        assert_eq!(config.match_config().unwrap(), MatchConfig::default());
    }

    #[test]
    fn test_unsupported_version() {
        let result = RkscanConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(
            result,
            Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2.0"
        ));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = RkscanConfig::from_yaml("version: [unterminated");
        assert!(matches!(result, Err(ConfigLoadError::YamlParse(_))));
    }

    #[test]
    fn test_hash_validation() {
        let yaml = r#"
version: "1.0"
matcher:
  hash:
    base: 256
    prime: 1
"#;

        let result = RkscanConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("prime must be >= 2"));
    }

    #[test]
    fn test_partial_ratio_validation() {
        let yaml = r#"
version: "1.0"
matcher:
  partial_ratio: 1.5
"#;

        let result = RkscanConfig::from_yaml(yaml);
        assert!(result.unwrap_err().to_string().contains("partial_ratio"));
    }

    #[test]
    fn test_logging_validation() {
        let yaml = r#"
version: "1"
logging:
  level: "  "
"#;

        let result = RkscanConfig::from_yaml(yaml);
        assert!(result.unwrap_err().to_string().contains("logging.level"));
    }

    #[test]
    fn test_full_yaml_roundtrip() {
        let yaml = r#"
version: "1.0"
name: "production"
matcher:
  version: 1
  window_size: 7
  partial_ratio: 0.75
  trace_limit: 5
  hash_strategy: "rolling"
  hash:
    base: 31
    prime: 65521
  max_tokens: 100000

logging:
  level: "rkscan=debug,matcher=trace"
  json: true
"#;

        let config = RkscanConfig::from_yaml(yaml).unwrap();
        let cfg = config.match_config().unwrap();
        assert_eq!(cfg.window_size, 7);
        assert_eq!(cfg.trace_limit, 5);
        assert_eq!(cfg.hash.base(), 31);
        assert_eq!(cfg.hash.prime(), 65_521);
        assert_eq!(cfg.max_tokens, Some(100_000));
        assert!(config.logging.json);

        let reserialized = serde_yaml::to_string(&config).unwrap();
        let reparsed = RkscanConfig::from_yaml(&reserialized).unwrap();
        assert_eq!(reparsed, config);
    }
}
