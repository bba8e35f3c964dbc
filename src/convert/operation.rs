//! Path-item builder
//!
//! Builds the operation one captured request contributes under its method.

use crate::collection::{Item, Response};
use crate::config::Config;
use crate::error::Result;
use crate::params::extract_parameters;
use crate::swagger::{Operation, Responses};
use serde_json::json;
use std::collections::BTreeMap;

/// Tag for items outside any group
pub const DEFAULT_TAG: &str = "default";

/// Build the operation for one item
pub fn build_operation(item: &Item, tag: Option<&str>, config: &Config) -> Result<Operation> {
    Ok(Operation {
        tags: vec![tag.unwrap_or(DEFAULT_TAG).to_string()],
        summary: item.name.clone(),
        parameters: extract_parameters(&item.request, config)?,
        responses: build_responses(&item.response, config),
    })
}

/// Map captured responses to `{code: {description: status}}`
///
/// Falls back to `config.responses` when nothing was captured. Codes come
/// out in ascending numeric order; a repeated code takes the last status.
pub fn build_responses(responses: &[Response], config: &Config) -> Responses {
    if responses.is_empty() {
        return config.responses.clone();
    }

    let by_code: BTreeMap<u16, &str> = responses
        .iter()
        .map(|r| (r.code, r.status.as_str()))
        .collect();

    by_code
        .into_iter()
        .map(|(code, status)| (code.to_string(), json!({ "description": status })))
        .collect()
}
