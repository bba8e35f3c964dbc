//! CLI commands and argument parsing

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Convert Postman-style collections into Swagger 2.0 documents
#[derive(Parser, Debug)]
#[command(name = "postman-swagger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the output file extension, else JSON)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a collection and write the Swagger document
    Convert {
        /// Collection export (JSON)
        collection: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a collection without writing it and print a summary
    Validate {
        /// Collection export (JSON)
        collection: PathBuf,
    },

    /// Print the schema inferred from a JSON5 request body
    Infer {
        /// Raw request body
        body: String,
    },
}
