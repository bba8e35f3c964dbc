//! Common types used throughout the converter
//!
//! Shared type aliases and the small enums that both the config and the
//! Swagger output model refer to.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type (insertion ordered)
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Parameter Categories
// ============================================================================

/// Where a Swagger parameter lives in the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Header,
    Body,
    Path,
    Query,
}

impl ParameterLocation {
    /// The `require_all` category that forces parameters at this location to be required
    pub fn category(self) -> RequireCategory {
        match self {
            ParameterLocation::Header => RequireCategory::Headers,
            ParameterLocation::Body => RequireCategory::Body,
            ParameterLocation::Path => RequireCategory::Path,
            ParameterLocation::Query => RequireCategory::Query,
        }
    }
}

/// Entry of the config's `require_all` list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequireCategory {
    Headers,
    Body,
    Path,
    Query,
}
