//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::collection::{load_collection, Body};
use crate::config::{load_config, Config};
use crate::convert::Converter;
use crate::error::Result;
use crate::output::{write_document, write_document_to, OutputFormat};
use crate::params::extract_body_params;
use crate::swagger::SwaggerDocument;
use serde_json::{json, Value};
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Convert { collection, output } => {
                self.convert(collection, output.as_deref())
            }
            Commands::Validate { collection } => self.validate(collection),
            Commands::Infer { body } => self.infer(body),
        }
    }

    /// Load configuration, falling back to defaults without `--config`
    fn load_config(&self) -> Result<Config> {
        match &self.cli.config {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading config");
                load_config(path)
            }
            None => Ok(Config::default()),
        }
    }

    /// Load the collection and run the conversion
    fn build_document(&self, collection: &Path) -> Result<SwaggerDocument> {
        let config = self.load_config()?;
        let collection = load_collection(collection)?;
        Converter::new(&config)
            .with_default_version(crate::VERSION)
            .convert(&collection)
    }

    /// Convert and write to a file or stdout
    fn convert(&self, collection: &Path, output: Option<&Path>) -> Result<()> {
        let doc = self.build_document(collection)?;

        match output {
            Some(path) => {
                let format = self
                    .cli
                    .format
                    .unwrap_or_else(|| OutputFormat::from_path(path));
                write_document(&doc, path, format)
            }
            None => {
                let format = self.cli.format.unwrap_or_default();
                write_document_to(&doc, &mut std::io::stdout().lock(), format)
            }
        }
    }

    /// Convert and report counts only
    fn validate(&self, collection: &Path) -> Result<()> {
        let doc = self.build_document(collection)?;

        self.output_message(&json!({
            "type": "SUMMARY",
            "summary": {
                "title": doc.info.title,
                "paths": doc.paths.len(),
                "operations": doc.operation_count(),
                "parameters": doc.parameter_count()
            }
        }))
    }

    /// Infer the body parameter for a raw payload
    fn infer(&self, body: &str) -> Result<()> {
        let config = self.load_config()?;
        let params = extract_body_params(Some(&Body::raw(body)), &config)?;

        let Some(param) = params.first() else {
            return self.output_message(&json!({ "type": "EMPTY" }));
        };
        self.output_message(&json!({
            "type": "SCHEMA",
            "name": param.name,
            "schema": param.schema
        }))
    }

    /// Print a message in the selected format
    fn output_message(&self, msg: &Value) -> Result<()> {
        match self.cli.format.unwrap_or_default() {
            OutputFormat::Json => println!("{}", serde_json::to_string(msg)?),
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(msg)?),
        }
        Ok(())
    }
}
