//! Command line argument parsing for the hamnet CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Hamnet - nearest-prototype classification over binary feature tables
#[derive(Parser, Debug, Clone)]
#[command(name = "hamnet")]
#[command(about = "A nearest-prototype Hamming classifier for delimited feature tables")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct HamnetArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl HamnetArgs {
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
    /// Classify a case table against a prototype table
    Classify(ClassifyArgs),

    /// Load and validate prototype and metadata tables without classifying
    Validate(ValidateArgs),
}

/// Arguments for classifying a case table
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Path to the prototype table (must include a 'Clase' column)
    #[arg(value_name = "PROTOTYPES")]
    pub prototypes: PathBuf,

    /// Path to the case table
    #[arg(value_name = "CASES")]
    pub cases: PathBuf,

    /// Column holding the case id (default: first column of the case table)
    #[arg(long, value_name = "NAME")]
    pub id_column: Option<String>,

    /// Metadata table with 'Caracteristica' and 'Tipo' columns
    #[arg(short, long, value_name = "PATH")]
    pub metadata: Option<PathBuf>,

    /// Append error and classification events to this log file
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Abort the whole run on the first row with a non-binary value
    #[arg(long)]
    pub abort_on_error: bool,
}

/// Arguments for validating input tables
#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// Path to the prototype table
    #[arg(value_name = "PROTOTYPES")]
    pub prototypes: PathBuf,

    /// Metadata table to validate the prototype columns against
    #[arg(short, long, value_name = "PATH")]
    pub metadata: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
