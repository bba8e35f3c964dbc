//! # postman-swagger
//!
//! Converts Postman-style API collections into Swagger 2.0 documents.
//!
//! Each captured request becomes an operation: headers, the JSON5 body, `{{var}}`
//! path segments and query entries become parameters, and the request body's
//! schema is inferred from the example payload.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use postman_swagger::{convert, load_collection, load_config, Result};
//!
//! fn main() -> Result<()> {
//!     let collection = load_collection("api.postman_collection.json")?;
//!     let config = load_config("swagger-config.yaml")?;
//!
//!     let doc = convert(&collection, &config)?;
//!     println!("{}", serde_json::to_string_pretty(&doc)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 Converter (convert module)               │
//! │   walk groups → tag items → merge by path → document     │
//! └──────────────────────────────────────────────────────────┘
//!                             │ per item
//! ┌──────────────────────────────────────────────────────────┐
//! │        build_operation: tags, summary, responses         │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//! ┌──────────┬───────────────┬──────────────┬────────────────┐
//! │  Header  │     Body      │     Path     │     Query      │
//! │          │  JSON5 → infer_schema        │                │
//! └──────────┴───────────────┴──────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Converter configuration
pub mod config;

/// Collection model and loader
pub mod collection;

/// Swagger 2.0 output model
pub mod swagger;

/// Schema inference from JSON bodies
pub mod schema;

/// Parameter extraction from captured requests
pub mod params;

/// Path items and document assembly
pub mod convert;

/// JSON/YAML document output
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use collection::{load_collection, load_collection_from_str, Collection};
pub use config::{load_config, load_config_from_str, Config};
pub use convert::{convert, Converter};
pub use swagger::SwaggerDocument;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
