//! Collection types
//!
//! Serde model of a Postman-style collection export. Fields the converter
//! does not read are ignored on load.

use crate::types::JsonValue;
use serde::{Deserialize, Serialize};

// ============================================================================
// Collection
// ============================================================================

/// Top-level collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection metadata
    #[serde(default)]
    pub info: CollectionInfo,
    /// Groups and ungrouped items, in export order
    #[serde(default)]
    pub item: Vec<Node>,
}

/// Collection metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<Description>,
}

impl CollectionInfo {
    /// Description text, whichever form it was exported in
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_ref().map(Description::text)
    }
}

/// Description as plain text or as a `{content, type}` object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Rich {
        #[serde(default)]
        content: String,
    },
}

impl Description {
    /// The description text
    pub fn text(&self) -> &str {
        match self {
            Description::Text(text) => text,
            Description::Rich { content } => content,
        }
    }
}

/// Entry of the collection tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Named folder of items
    Group(Group),
    /// Single captured request
    Item(Item),
}

/// Named folder of items; its name becomes the items' tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub item: Vec<Item>,
}

// ============================================================================
// Item
// ============================================================================

/// One captured request with its observed responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub request: Request,
    #[serde(default)]
    pub response: Vec<Response>,
}

/// Captured request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub method: String,
    pub url: Url,
    #[serde(default)]
    pub header: Vec<KeyValue>,
    #[serde(default)]
    pub body: Option<Body>,
}

/// Request URL split into segments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Url {
    /// URL as typed in the client
    #[serde(default)]
    pub raw: Option<String>,
    /// Path segments; `{{name}}` marks a variable segment
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub query: Vec<KeyValue>,
}

/// Header or query entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    /// Captured value with its original JSON type
    #[serde(default)]
    pub value: JsonValue,
}

impl KeyValue {
    /// Create a string-valued entry
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: JsonValue::String(value.into()),
        }
    }
}

/// Request body; only raw payloads are converted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub raw: Option<String>,
}

impl Body {
    /// Create a raw body
    pub fn raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }
}

/// Observed response status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub code: u16,
    pub status: String,
}

impl Response {
    /// Create a response entry
    pub fn new(code: u16, status: impl Into<String>) -> Self {
        Self {
            code,
            status: status.into(),
        }
    }
}
