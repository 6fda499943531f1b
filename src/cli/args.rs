//! Command line argument parsing for the morph-filter CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// morph-filter - Japanese morphological record filter
#[derive(Parser, Debug, Clone)]
#[command(name = "morph-filter")]
#[command(about = "Tokenize text columns of JSON Lines records into derived columns")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct MorphFilterArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug, 4=trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl MorphFilterArgs {
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
    /// Print the output schema for an input schema
    Plan(PlanArgs),

    /// Transform JSON Lines records
    Run(RunArgs),
}

/// Arguments for planning the output schema
#[derive(Parser, Debug, Clone)]
pub struct PlanArgs {
    /// Filter configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: PathBuf,

    /// Input schema file (JSON array of {name, type})
    #[arg(short, long, value_name = "SCHEMA_FILE")]
    pub schema: PathBuf,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for transforming records
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Filter configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: PathBuf,

    /// Input schema file (JSON array of {name, type})
    #[arg(short, long, value_name = "SCHEMA_FILE")]
    pub schema: PathBuf,

    /// Input records (JSON Lines); standard input when omitted
    #[arg(short, long, value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,

    /// Output records (JSON Lines); standard output when omitted
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Number of records per page
    #[arg(short, long, default_value = "1000", value_parser = clap::value_parser!(u32).range(1..))]
    pub batch_size: u32,
}
