//! Document writer
//!
//! Serializes a Swagger document as pretty JSON or YAML.

use crate::error::{Error, Result};
use crate::swagger::SwaggerDocument;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Serialization format for generated documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// YAML
    Yaml,
}

impl OutputFormat {
    /// Guess the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => OutputFormat::Yaml,
            _ => OutputFormat::Json,
        }
    }
}

/// Render a document in the given format
pub fn render_document(doc: &SwaggerDocument, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(doc)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(doc)?),
    }
}

/// Write a document to a file, creating parent directories as needed
pub fn write_document(
    doc: &SwaggerDocument,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<()> {
    let path = path.as_ref();
    let rendered = render_document(doc, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            Error::Other(format!(
                "Failed to create output directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    fs::write(path, rendered)?;
    tracing::info!(path = %path.display(), ?format, "Wrote Swagger document");
    Ok(())
}

/// Write a document to any writer (stdout in the CLI)
pub fn write_document_to<W: Write>(
    doc: &SwaggerDocument,
    writer: &mut W,
    format: OutputFormat,
) -> Result<()> {
    let rendered = render_document(doc, format)?;
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    Ok(())
}
