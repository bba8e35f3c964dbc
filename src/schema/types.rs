//! Schema types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Primitive Swagger type name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl SchemaType {
    /// Classify a runtime JSON value, `None` for null
    pub fn of(value: &Value) -> Option<SchemaType> {
        match value {
            Value::String(_) => Some(SchemaType::String),
            Value::Number(_) => Some(SchemaType::Number),
            Value::Bool(_) => Some(SchemaType::Boolean),
            Value::Object(_) => Some(SchemaType::Object),
            Value::Array(_) => Some(SchemaType::Array),
            Value::Null => None,
        }
    }
}

/// Inlined Swagger schema fragment
///
/// Serializes as `{"type": "object", "properties": {..}}`,
/// `{"type": "array", "items": {..}}` or `{"type": "string"}` and friends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SwaggerSchema {
    Object {
        properties: IndexMap<String, SwaggerSchema>,
    },
    Array {
        items: Box<SwaggerSchema>,
    },
    Number,
    String,
    Boolean,
}

impl SwaggerSchema {
    /// Create an object schema
    pub fn object(properties: IndexMap<String, SwaggerSchema>) -> Self {
        SwaggerSchema::Object { properties }
    }

    /// Create an array schema
    pub fn array(items: SwaggerSchema) -> Self {
        SwaggerSchema::Array {
            items: Box::new(items),
        }
    }

    /// Top-level type of this fragment
    pub fn schema_type(&self) -> SchemaType {
        match self {
            SwaggerSchema::Object { .. } => SchemaType::Object,
            SwaggerSchema::Array { .. } => SchemaType::Array,
            SwaggerSchema::Number => SchemaType::Number,
            SwaggerSchema::String => SchemaType::String,
            SwaggerSchema::Boolean => SchemaType::Boolean,
        }
    }

    /// Object properties, if this is an object schema
    pub fn properties(&self) -> Option<&IndexMap<String, SwaggerSchema>> {
        match self {
            SwaggerSchema::Object { properties } => Some(properties),
            _ => None,
        }
    }

    /// Item schema, if this is an array schema
    pub fn items(&self) -> Option<&SwaggerSchema> {
        match self {
            SwaggerSchema::Array { items } => Some(items),
            _ => None,
        }
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
