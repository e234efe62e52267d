//! Command line interface definition

use clap::{Parser, Subcommand};
use credsim_types::ColorChoice;
use std::path::PathBuf;

/// credsim - Batch credential-verification simulator
#[derive(Parser)]
#[command(name = "credsim")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Batch credential-verification simulator")]
#[command(
    long_about = "Batch credential-verification simulator.\n\n\
                  Evaluates identifier:secret lines one at a time against a local heuristic. \
                  Nothing is sent anywhere; verdicts are simulated."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging to the credsim log directory
    #[arg(long, global = true)]
    pub debug: bool,

    /// Color output control
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorChoice>,

    /// Use alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate every record of an input file
    Run {
        /// File with one identifier:secret pair per line
        file: PathBuf,

        /// Write working records to this file
        #[arg(short, long, value_name = "PATH")]
        export: Option<PathBuf>,

        /// Seed the random source for a reproducible run
        #[arg(long, value_name = "N")]
        seed: Option<u64>,

        /// Skip the simulated delays
        #[arg(long)]
        no_delay: bool,
    },

    /// Check an input file without evaluating it
    #[command(alias = "check")]
    Validate {
        /// File to check
        file: PathBuf,
    },

    /// Print or write the demo input
    Sample {
        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}
