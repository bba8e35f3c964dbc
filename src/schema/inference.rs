//! Schema inference from JSON values

use super::types::SwaggerSchema;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Infer an inlined Swagger schema from a parsed request body value
///
/// Objects keep their key order, arrays are typed from their first element
/// only, and an empty array gets `string` items. `null` has no Swagger type
/// here and fails the whole conversion.
pub fn infer_schema(value: &Value) -> Result<SwaggerSchema> {
    match value {
        Value::Array(arr) => infer_array(arr),
        Value::Object(map) => infer_object(map),
        Value::Number(_) => Ok(SwaggerSchema::Number),
        Value::String(_) => Ok(SwaggerSchema::String),
        Value::Bool(_) => Ok(SwaggerSchema::Boolean),
        Value::Null => Err(Error::unsupported_type("null")),
    }
}

fn infer_array(arr: &[Value]) -> Result<SwaggerSchema> {
    let items = match arr.first() {
        Some(first) => infer_schema(first)?,
        None => SwaggerSchema::String,
    };
    Ok(SwaggerSchema::array(items))
}

fn infer_object(map: &Map<String, Value>) -> Result<SwaggerSchema> {
    let mut properties = IndexMap::with_capacity(map.len());
    for (key, val) in map {
        properties.insert(key.clone(), infer_schema(val)?);
    }
    Ok(SwaggerSchema::object(properties))
}
