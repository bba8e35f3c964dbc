//! Conversion module
//!
//! Drives the conversion of a whole collection.
//!
//! # Overview
//!
//! - `Converter` - walks the collection and assembles the document
//! - `build_operation` - builds the operation for one captured request
//! - `swagger_path` - rewrites `{{var}}` URL segments into `{var}` templates

mod document;
mod operation;

pub use document::{
    convert, swagger_path, tagged_items, Converter, TaggedItem, DEFAULT_DESCRIPTION,
    DEFAULT_SCHEMES,
};
pub use operation::{build_operation, build_responses, DEFAULT_TAG};
