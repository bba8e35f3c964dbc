//! Converter configuration
//!
//! The config object supplies document-level defaults (`info`, `host`,
//! `schemes`, ...) and tunes parameter extraction (`omit`, `require_all`).
//! It is loaded from YAML or JSON; every field has a default so an empty
//! file is a valid config.

use crate::error::{Error, Result};
use crate::swagger::Responses;
use crate::types::{JsonValue, RequireCategory};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs;
use std::path::Path;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete converter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Overrides for the document `info` block
    #[serde(default)]
    pub info: Option<InfoConfig>,

    /// Document `host`
    #[serde(default)]
    pub host: Option<String>,

    /// Document `basepath`
    #[serde(default)]
    pub basepath: Option<String>,

    /// Document `schemes` (defaults to `["https"]` in the output)
    #[serde(default)]
    pub schemes: Option<Vec<String>>,

    /// Document `consumes`
    #[serde(default)]
    pub consumes: Option<Vec<String>>,

    /// Document `produces`
    #[serde(default)]
    pub produces: Option<Vec<String>>,

    /// Parts of captured requests to leave out
    #[serde(default)]
    pub omit: OmitConfig,

    /// Parameter categories whose parameters are all marked required
    #[serde(default)]
    pub require_all: Vec<RequireCategory>,

    /// Responses used for items without any captured response
    #[serde(default = "default_responses")]
    pub responses: Responses,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            info: None,
            host: None,
            basepath: None,
            schemes: None,
            consumes: None,
            produces: None,
            omit: OmitConfig::default(),
            require_all: Vec::new(),
            responses: default_responses(),
        }
    }
}

fn default_responses() -> Responses {
    let mut responses = Responses::new();
    responses.insert("200".to_string(), json!({ "description": "OK" }));
    responses
}

impl Config {
    /// Check whether a `require_all` category is enabled
    pub fn requires(&self, category: RequireCategory) -> bool {
        self.require_all.contains(&category)
    }

    /// Check whether a header is dropped from the output (case-sensitive)
    pub fn omits_header(&self, key: &str) -> bool {
        self.omit.headers.iter().any(|h| h == key)
    }

    /// Non-empty `info.name` override
    pub fn info_name(&self) -> Option<&str> {
        self.info.as_ref().and_then(|i| non_empty(i.name.as_deref()))
    }

    /// Non-empty `info.description` override
    pub fn info_description(&self) -> Option<&str> {
        self.info
            .as_ref()
            .and_then(|i| non_empty(i.description.as_deref()))
    }

    /// Non-empty `info.version` override
    pub fn info_version(&self) -> Option<&str> {
        self.info
            .as_ref()
            .and_then(|i| non_empty(i.version.as_deref()))
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// ============================================================================
// Sections
// ============================================================================

/// `info` overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfoConfig {
    /// Document title
    #[serde(default)]
    pub name: Option<String>,

    /// Document description
    #[serde(default)]
    pub description: Option<String>,

    /// API version
    #[serde(default)]
    pub version: Option<String>,
}

/// Omission rules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OmitConfig {
    /// Header names never emitted as parameters
    #[serde(default)]
    pub headers: Vec<String>,
}

// ============================================================================
// Loading
// ============================================================================

/// Load a config from a YAML or JSON file
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_config_from_str(&content)
}

/// Load a config from a YAML or JSON string
pub fn load_config_from_str(content: &str) -> Result<Config> {
    // An empty file deserializes to unit in YAML
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    let raw: JsonValue = serde_yaml::from_str(content)
        .map_err(|e| Error::config(format!("Failed to parse config: {e}")))?;
    if raw.is_null() {
        return Ok(Config::default());
    }
    if !raw.is_object() {
        return Err(Error::config("Config must be a mapping"));
    }

    serde_json::from_value(raw).map_err(|e| Error::config(format!("Invalid config: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.omit.headers.is_empty());
        assert!(config.require_all.is_empty());
        assert_eq!(config.responses["200"], json!({"description": "OK"}));
    }

    #[test]
    fn test_load_yaml_config() {
        let yaml = r#"
info:
  name: Pet Store
  version: "2.1.0"
host: api.example.com
basepath: /v1
schemes: [http, https]
consumes: [application/json]
omit:
  headers: [Authorization, Cookie]
require_all: [headers, path]
responses:
  "500":
    description: Server Error
"#;

        let config = load_config_from_str(yaml).unwrap();
        assert_eq!(config.info_name(), Some("Pet Store"));
        assert_eq!(config.info_description(), None);
        assert_eq!(config.info_version(), Some("2.1.0"));
        assert_eq!(config.host.as_deref(), Some("api.example.com"));
        assert_eq!(config.basepath.as_deref(), Some("/v1"));
        assert_eq!(
            config.schemes,
            Some(vec!["http".to_string(), "https".to_string()])
        );
        assert_eq!(config.produces, None);
        assert!(config.omits_header("Authorization"));
        assert!(!config.omits_header("authorization"));
        assert!(config.requires(RequireCategory::Headers));
        assert!(config.requires(RequireCategory::Path));
        assert!(!config.requires(RequireCategory::Body));
        assert_eq!(config.responses.len(), 1);
        assert_eq!(
            config.responses["500"],
            json!({"description": "Server Error"})
        );
    }

    #[test]
    fn test_load_json_config() {
        let config =
            load_config_from_str(r#"{"omit": {"headers": ["X-Trace"]}, "require_all": ["query"]}"#)
                .unwrap();
        assert_eq!(config.omit.headers, vec!["X-Trace".to_string()]);
        assert!(config.requires(RequireCategory::Query));
    }

    #[test]
    fn test_empty_info_fields_are_absent() {
        let config = load_config_from_str("info:\n  name: \"\"\n").unwrap();
        assert_eq!(config.info_name(), None);
    }

    #[test]
    fn test_invalid_require_category() {
        let err = load_config_from_str("require_all: [cookies]").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_non_mapping_config() {
        let err = load_config_from_str("- a\n- b\n").unwrap_err();
        assert!(err.to_string().contains("mapping"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "host: example.org\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.host.as_deref(), Some("example.org"));
    }
}
