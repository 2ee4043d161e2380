// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for dotquery

use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::renderer::QueryValue;

#[derive(Parser)]
#[command(name = "dotquery")]
#[command(about = "Render named query templates from plain-text definition files")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the query ids defined in one or more files
    List {
        #[arg(required = true, help = "Definition files, loaded in order")]
        files: Vec<PathBuf>,
    },

    /// Load definition files and report whether they are well formed
    Check {
        #[arg(required = true, help = "Definition files, loaded in order")]
        files: Vec<PathBuf>,
    },

    /// Render one query to stdout
    Render {
        #[arg(help = "Id of the query to render")]
        id: String,

        #[arg(
            short,
            long = "file",
            required = true,
            help = "Definition files, loaded in order"
        )]
        files: Vec<PathBuf>,

        #[arg(short, long = "positional", help = "Positional arguments, in order")]
        positional: Vec<String>,

        #[arg(long = "var", help = "Named arguments (key=value)")]
        vars: Vec<String>,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse named arguments from key=value format
    pub fn parse_variables(vars: &[String]) -> anyhow::Result<HashMap<String, QueryValue>> {
        let mut variables = HashMap::new();

        for var in vars {
            if let Some((key, value)) = var.split_once('=') {
                variables.insert(key.to_string(), coerce_value(value));
            } else {
                return Err(anyhow::anyhow!(
                    "Invalid variable format '{}'. Expected 'key=value'",
                    var
                ));
            }
        }

        Ok(variables)
    }
}

/// Coerce a CLI string to the narrowest value type it parses as, so numbers
/// and booleans render unwrapped while everything else stays quoted text
pub fn coerce_value(raw: &str) -> QueryValue {
    if let Ok(n) = raw.parse::<i64>() {
        return QueryValue::Integer(n);
    }
    if let Ok(f) = raw.parse::<f64>() {
        return QueryValue::Float(f);
    }
    if let Ok(b) = raw.parse::<bool>() {
        return QueryValue::Bool(b);
    }
    QueryValue::Text(raw.to_string())
}
