//! CLI module
//!
//! Command-line interface for converting collections.
//!
//! # Commands
//!
//! - `convert` - Write the Swagger document for a collection
//! - `validate` - Run the conversion and print a summary
//! - `infer` - Show the schema inferred from a request body

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_convert() {
        let cli = Cli::parse_from([
            "postman-swagger",
            "-C",
            "config.yaml",
            "convert",
            "collection.json",
            "-o",
            "swagger.yaml",
        ]);

        assert_eq!(cli.config, Some(PathBuf::from("config.yaml")));
        assert_eq!(cli.format, None);
        match cli.command {
            Commands::Convert { collection, output } => {
                assert_eq!(collection, PathBuf::from("collection.json"));
                assert_eq!(output, Some(PathBuf::from("swagger.yaml")));
            }
            other => panic!("Expected convert, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["postman-swagger", "validate", "c.json", "--format", "yaml", "-v"]);
        assert_eq!(cli.format, Some(OutputFormat::Yaml));
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_infer() {
        let cli = Cli::parse_from(["postman-swagger", "infer", "{a: 1}"]);
        match cli.command {
            Commands::Infer { body } => assert_eq!(body, "{a: 1}"),
            other => panic!("Expected infer, got {other:?}"),
        }
    }

    #[test]
    fn test_runner_validate_and_convert() {
        let dir = tempfile::tempdir().unwrap();
        let collection = dir.path().join("collection.json");
        std::fs::write(
            &collection,
            r#"{"info": {"name": "T"}, "item": [{"name": "Ping", "request": {"method": "GET", "url": {"path": ["ping"]}}}]}"#,
        )
        .unwrap();
        let output = dir.path().join("out").join("swagger.yaml");

        let cli = Cli::parse_from([
            "postman-swagger",
            "convert",
            collection.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]);
        Runner::new(cli).run().unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("/ping:"));

        let cli = Cli::parse_from(["postman-swagger", "validate", collection.to_str().unwrap()]);
        Runner::new(cli).run().unwrap();
    }

    #[test]
    fn test_runner_missing_collection() {
        let cli = Cli::parse_from(["postman-swagger", "validate", "/no/such/file.json"]);
        assert!(Runner::new(cli).run().is_err());
    }
}
