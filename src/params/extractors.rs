//! Header, body, path and query parameter extraction

use super::body::parse_body;
use crate::collection::{Body, KeyValue, Request, Url};
use crate::config::Config;
use crate::error::Result;
use crate::schema::{infer_schema, SchemaType};
use crate::swagger::Parameter;
use crate::types::{JsonValue, ParameterLocation};
use regex::Regex;
use std::sync::LazyLock;

/// Name used for body parameters unless the payload has a single top-level key
pub const DEFAULT_BODY_NAME: &str = "body";

/// Regex for path placeholders: {{name}}
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.*)\}\}").expect("placeholder regex is valid"));

/// All parameters of a request: header, body, path, then query
pub fn extract_parameters(request: &Request, config: &Config) -> Result<Vec<Parameter>> {
    let mut params = extract_header_params(&request.header, config);
    params.extend(extract_body_params(request.body.as_ref(), config)?);
    params.extend(extract_path_params(&request.url, config));
    params.extend(extract_query_params(&request.url, config));
    Ok(params)
}

/// Whether `require_all` covers parameters at this location
fn is_required(location: ParameterLocation, config: &Config) -> bool {
    config.requires(location.category())
}

/// Header parameters, minus the ones listed in `omit.headers`
pub fn extract_header_params(headers: &[KeyValue], config: &Config) -> Vec<Parameter> {
    let required = is_required(ParameterLocation::Header, config);
    headers
        .iter()
        .filter(|h| !config.omits_header(&h.key))
        .map(|h| {
            Parameter::typed(
                ParameterLocation::Header,
                &h.key,
                SchemaType::String,
                required,
            )
        })
        .collect()
}

/// Query parameters typed by their captured value
///
/// Entries without a value are reported as `string`.
pub fn extract_query_params(url: &Url, config: &Config) -> Vec<Parameter> {
    let required = is_required(ParameterLocation::Query, config);
    url.query
        .iter()
        .map(|q| {
            let param_type = SchemaType::of(&q.value).unwrap_or(SchemaType::String);
            Parameter::typed(ParameterLocation::Query, &q.key, param_type, required)
        })
        .collect()
}

/// Path parameters for every `{{name}}` segment after the first
///
/// The first segment is the route prefix and never a variable.
pub fn extract_path_params(url: &Url, config: &Config) -> Vec<Parameter> {
    let required = is_required(ParameterLocation::Path, config);
    url.path
        .iter()
        .skip(1)
        .filter_map(|segment| placeholder_name(segment))
        .map(|name| {
            // Typed after the placeholder's name, which is always a string
            Parameter::typed(ParameterLocation::Path, name, SchemaType::String, required)
        })
        .collect()
}

/// Variable name of a `{{name}}` segment
pub fn placeholder_name(segment: &str) -> Option<&str> {
    if !segment.contains("{{") {
        return None;
    }
    match PLACEHOLDER_REGEX.captures(segment) {
        Some(caps) => caps.get(1).map(|m| m.as_str()),
        None => {
            tracing::warn!(segment, "Skipping path segment with unterminated placeholder");
            None
        }
    }
}

/// Single body parameter inferred from a raw JSON5 payload
pub fn extract_body_params(body: Option<&Body>, config: &Config) -> Result<Vec<Parameter>> {
    let Some(raw) = body.and_then(|b| b.raw.as_deref()).filter(|r| !r.is_empty()) else {
        return Ok(Vec::new());
    };

    let parsed = parse_body(raw)?;

    let name = match &parsed {
        JsonValue::Object(map) if map.len() == 1 => map
            .keys()
            .next()
            .map_or(DEFAULT_BODY_NAME, String::as_str),
        _ => DEFAULT_BODY_NAME,
    };

    let schema = infer_schema(&parsed)?;
    Ok(vec![Parameter::body(
        name,
        schema,
        is_required(ParameterLocation::Body, config),
    )])
}
