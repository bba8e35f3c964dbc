//! Raw body parsing
//!
//! Bodies are parsed as strict JSON first and as JSON5 only when that fails.
//! `serde_json` reads integers too wide for i64/u64 as floats, which the JSON5
//! parser rejects. JSON5 allows `NaN` and `Infinity`, which `serde_json::Value`
//! would turn into `null`; [`BodyValue`] keeps them as numbers.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::Number;
use std::fmt;

/// Parse a raw request body into a JSON value
pub fn parse_body(raw: &str) -> Result<JsonValue> {
    serde_json::from_str::<BodyValue>(raw)
        .or_else(|_| json5::from_str::<BodyValue>(raw))
        .map(|body| body.0)
        .map_err(|e| Error::malformed_body(raw, e.to_string()))
}

/// JSON value whose non-finite floats are kept as numbers
#[derive(Debug, Clone, PartialEq)]
pub struct BodyValue(pub JsonValue);

impl<'de> Deserialize<'de> for BodyValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(BodyValueVisitor).map(BodyValue)
    }
}

struct BodyValueVisitor;

impl<'de> Visitor<'de> for BodyValueVisitor {
    type Value = JsonValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON5 value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Number(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Number(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<JsonValue, E> {
        // NaN and the infinities only need to stay numbers for schema inference
        let number = Number::from_f64(v).unwrap_or_else(|| Number::from(0));
        Ok(JsonValue::Number(number))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<JsonValue, D::Error> {
        BodyValue::deserialize(deserializer).map(|body| body.0)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<JsonValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(BodyValue(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(JsonValue::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<JsonValue, A::Error> {
        let mut object = JsonObject::new();
        while let Some((key, BodyValue(value))) = map.next_entry::<String, BodyValue>()? {
            object.insert(key, value);
        }
        Ok(JsonValue::Object(object))
    }
}
