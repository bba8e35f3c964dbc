//! Error types for the converter
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Every variant is fatal: a conversion either yields a whole document or fails.

use thiserror::Error;

/// The main error type for the converter
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Conversion Errors
    // ============================================================================
    #[error("Request body is not valid JSON5 ({message}), raw body: {raw}")]
    MalformedBody { raw: String, message: String },

    #[error("Type {type_name} not supported in request body")]
    UnsupportedType { type_name: String },

    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Collection error: {message}")]
    Collection { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a malformed body error, keeping the raw payload for diagnosis
    pub fn malformed_body(raw: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedBody {
            raw: raw.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported type error
    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a collection error
    pub fn collection(message: impl Into<String>) -> Self {
        Self::Collection {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Raw body text carried by a [`Error::MalformedBody`]
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Error::MalformedBody { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

/// Result type alias for the converter
pub type Result<T> = std::result::Result<T, Error>;
