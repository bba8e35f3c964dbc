//! Output module
//!
//! Writes generated Swagger documents as JSON or YAML to files or streams.

mod writer;

pub use writer::{render_document, write_document, write_document_to, OutputFormat};

#[cfg(test)]
mod tests;
