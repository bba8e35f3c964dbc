//! JSON parser for collection exports

use crate::collection::types::Collection;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load a collection from an exported JSON file
pub fn load_collection(path: impl AsRef<Path>) -> Result<Collection> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::collection(format!(
                "Failed to read collection file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_collection_from_str(&content)
}

/// Load a collection from a JSON string
pub fn load_collection_from_str(json: &str) -> Result<Collection> {
    let collection: Collection = serde_json::from_str(json)
        .map_err(|e| Error::collection(format!("Failed to parse collection JSON: {e}")))?;

    tracing::debug!(
        collection = collection.info.name.as_deref().unwrap_or_default(),
        nodes = collection.item.len(),
        "Loaded collection"
    );
    Ok(collection)
}
