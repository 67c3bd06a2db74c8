//! Command line argument parsing for Emoscan CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalyzerConfig, DEFAULT_KEYWORDS_PATH};
use crate::error::Result;
use crate::matcher::SpanScope;

/// Emoscan - detect emotional keywords in text
#[derive(Parser, Debug, Clone)]
#[command(name = "emoscan")]
#[command(about = "Detect whether a text contains words from an emotional keyword dictionary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct EmoscanArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl EmoscanArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check whether a document contains emotional keywords
    Check(CheckArgs),

    /// Print the first sentence of a document
    #[command(name = "first-sentence")]
    FirstSentence(FirstSentenceArgs),

    /// Check many documents against one dictionary
    Batch(BatchArgs),

    /// Show the normalised keyword dictionary
    Keywords(KeywordsArgs),
}

/// Arguments for checking one document
#[derive(Parser, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Keyword dictionary file, one keyword per line
    #[arg(short, long, value_name = "KEYWORDS_FILE", env = "EMOSCAN_KEYWORDS")]
    pub keywords: Option<PathBuf>,

    /// Document to analyse
    #[arg(short, long, value_name = "INPUT_FILE", env = "EMOSCAN_INPUT")]
    pub input: Option<PathBuf>,

    /// Part of the document to analyse
    #[arg(short, long)]
    pub scope: Option<SpanScope>,

    /// Fail instead of printing 0 when the check cannot be performed
    #[arg(long)]
    pub strict: bool,

    /// Create missing dictionary and input files with example content
    #[arg(long)]
    pub scaffold: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

impl CheckArgs {
    /// Build the run configuration: flags override the config file, which
    /// overrides the defaults.
    pub fn resolve(&self) -> Result<AnalyzerConfig> {
        let mut config = match &self.config {
            Some(path) => AnalyzerConfig::from_file(path)?,
            None => AnalyzerConfig::default(),
        };

        if let Some(keywords) = &self.keywords {
            config.keywords_path = keywords.clone();
        }
        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(scope) = self.scope {
            config.scope = scope;
        }
        config.strict |= self.strict;
        config.scaffold |= self.scaffold;

        Ok(config)
    }
}

/// Arguments for printing the first sentence
#[derive(Parser, Debug, Clone)]
pub struct FirstSentenceArgs {
    /// Document to read
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,
}

/// Arguments for checking many documents
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// Keyword dictionary file, one keyword per line
    #[arg(
        short,
        long,
        value_name = "KEYWORDS_FILE",
        env = "EMOSCAN_KEYWORDS",
        default_value = DEFAULT_KEYWORDS_PATH
    )]
    pub keywords: PathBuf,

    /// Part of each document to analyse
    #[arg(short, long, default_value = "document")]
    pub scope: SpanScope,

    /// Fail on the first document that cannot be checked
    #[arg(long)]
    pub strict: bool,

    /// Documents to analyse
    #[arg(value_name = "INPUT_FILE", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,
}

/// Arguments for showing the dictionary
#[derive(Parser, Debug, Clone)]
pub struct KeywordsArgs {
    /// Keyword dictionary file, one keyword per line
    #[arg(
        short,
        long,
        value_name = "KEYWORDS_FILE",
        env = "EMOSCAN_KEYWORDS",
        default_value = DEFAULT_KEYWORDS_PATH
    )]
    pub keywords: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
