//! Document assembler
//!
//! Walks the collection, merges items that share a path template and fills in
//! the document-level fields from the config.

use super::operation::build_operation;
use crate::collection::{Collection, Item, Node};
use crate::config::{non_empty, Config};
use crate::error::Result;
use crate::swagger::{Info, Paths, SwaggerDocument, SWAGGER_VERSION};
use tracing::{debug, info};

/// Title used when neither the config nor the collection names the API
const DEFAULT_TITLE: &str = "";

/// Description used when neither the config nor the collection describes the API
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// Scheme list used when the config has none
pub const DEFAULT_SCHEMES: &[&str] = &["https"];

/// An item paired with the name of the group it was found in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaggedItem<'a> {
    pub tag: Option<&'a str>,
    pub item: &'a Item,
}

/// Flatten the collection tree in walk order, tagging grouped items
pub fn tagged_items(collection: &Collection) -> Vec<TaggedItem<'_>> {
    let mut items = Vec::new();
    for node in &collection.item {
        match node {
            Node::Group(group) => items.extend(group.item.iter().map(|item| TaggedItem {
                tag: Some(group.name.as_str()),
                item,
            })),
            Node::Item(item) => items.push(TaggedItem { tag: None, item }),
        }
    }
    items
}

/// Swagger path template for a list of URL segments
///
/// `["users", "{{id}}"]` becomes `/users/{id}`. Braces are rewritten with two
/// plain substring replacements, not a balanced parse.
pub fn swagger_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
        .replace("{{", "{")
        .replace("}}", "}")
}

/// Converts collections into Swagger documents under one config
#[derive(Debug, Clone)]
pub struct Converter<'a> {
    config: &'a Config,
    default_version: String,
}

impl<'a> Converter<'a> {
    /// Create a converter; `info.version` falls back to this crate's version
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            default_version: crate::VERSION.to_string(),
        }
    }

    /// Set the version used when the config has no `info.version`
    #[must_use]
    pub fn with_default_version(mut self, version: impl Into<String>) -> Self {
        self.default_version = version.into();
        self
    }

    /// Convert a collection into a complete document
    pub fn convert(&self, collection: &Collection) -> Result<SwaggerDocument> {
        let config = self.config;
        let paths = self.build_paths(collection)?;

        let doc = SwaggerDocument {
            swagger: SWAGGER_VERSION.to_string(),
            info: self.build_info(collection),
            host: config.host.clone(),
            basepath: config.basepath.clone(),
            schemes: config.schemes.clone().unwrap_or_else(|| {
                DEFAULT_SCHEMES.iter().map(ToString::to_string).collect()
            }),
            consumes: config.consumes.clone(),
            produces: config.produces.clone(),
            paths,
        };

        info!(
            title = %doc.info.title,
            paths = doc.paths.len(),
            operations = doc.operation_count(),
            "Converted collection"
        );
        Ok(doc)
    }

    fn build_info(&self, collection: &Collection) -> Info {
        let title = self
            .config
            .info_name()
            .or_else(|| non_empty(collection.info.name.as_deref()))
            .unwrap_or(DEFAULT_TITLE);
        let description = self
            .config
            .info_description()
            .or_else(|| non_empty(collection.info.description_text()))
            .unwrap_or(DEFAULT_DESCRIPTION);
        let version = self
            .config
            .info_version()
            .unwrap_or(self.default_version.as_str());

        Info {
            title: title.to_string(),
            description: description.to_string(),
            version: version.to_string(),
        }
    }

    fn build_paths(&self, collection: &Collection) -> Result<Paths> {
        let mut paths = Paths::new();

        for TaggedItem { tag, item } in tagged_items(collection) {
            let path = swagger_path(&item.request.url.path);
            let method = item.request.method.to_lowercase();
            debug!(
                item = %item.name,
                tag = tag.unwrap_or_default(),
                url = item.request.url.raw.as_deref().unwrap_or_default(),
                %method,
                %path,
                "Converting item"
            );

            let operation = build_operation(item, tag, self.config)?;
            let path_item = paths.entry(path).or_default();
            if path_item.insert(method, operation).is_some() {
                debug!(item = %item.name, "Replaced earlier operation with same path and method");
            }
        }

        Ok(paths)
    }
}

/// Convert a collection with the crate version as default `info.version`
pub fn convert(collection: &Collection, config: &Config) -> Result<SwaggerDocument> {
    Converter::new(config).convert(collection)
}
