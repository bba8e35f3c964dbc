//! Swagger 2.0 document types
//!
//! Only the subset the converter emits. Field order matches the order keys
//! appear in generated documents.

use crate::schema::{SchemaType, SwaggerSchema};
use crate::types::{JsonObject, ParameterLocation};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Swagger version emitted in every document
pub const SWAGGER_VERSION: &str = "2.0";

/// Path template → path item
pub type Paths = IndexMap<String, PathItem>;

/// Lower-cased HTTP method → operation
pub type PathItem = IndexMap<String, Operation>;

/// Swagger responses object (status code → response)
pub type Responses = JsonObject;

// ============================================================================
// Document
// ============================================================================

/// Top-level Swagger 2.0 document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwaggerDocument {
    /// Always "2.0"
    pub swagger: String,

    pub info: Info,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basepath: Option<String>,

    pub schemes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumes: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,

    pub paths: Paths,
}

impl SwaggerDocument {
    /// Number of operations across all paths
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(IndexMap::len).sum()
    }

    /// Number of parameters across all operations
    pub fn parameter_count(&self) -> usize {
        self.paths
            .values()
            .flat_map(IndexMap::values)
            .map(|op| op.parameters.len())
            .sum()
    }

    /// Look up an operation by path template and method
    pub fn operation(&self, path: &str, method: &str) -> Option<&Operation> {
        self.paths.get(path)?.get(&method.to_lowercase())
    }
}

/// Document `info` block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub description: String,
    pub version: String,
}

// ============================================================================
// Operation
// ============================================================================

/// One method under a path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub tags: Vec<String>,
    pub summary: String,
    pub parameters: Vec<Parameter>,
    pub responses: Responses,
}

// ============================================================================
// Parameter
// ============================================================================

/// Swagger parameter object
///
/// Body parameters carry `schema`, every other location carries `type`.
/// Build them through [`Parameter::typed`] and [`Parameter::body`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(rename = "in")]
    pub location: ParameterLocation,

    pub name: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub param_type: Option<SchemaType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SwaggerSchema>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl Parameter {
    /// Create a header, path or query parameter
    pub fn typed(
        location: ParameterLocation,
        name: impl Into<String>,
        param_type: SchemaType,
        required: bool,
    ) -> Self {
        debug_assert!(location != ParameterLocation::Body);
        Self {
            location,
            name: name.into(),
            required,
            param_type: Some(param_type),
            schema: None,
        }
    }

    /// Create a body parameter
    pub fn body(name: impl Into<String>, schema: SwaggerSchema, required: bool) -> Self {
        Self {
            location: ParameterLocation::Body,
            name: name.into(),
            required,
            param_type: None,
            schema: Some(schema),
        }
    }
}
