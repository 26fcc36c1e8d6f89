//! Goroutine Grid CLI
//!
//! Summarizes goroutine dumps: which functions the routines are parked
//! in, and how many distinct stacks each one has.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use goroutine_grid::commands::{
    execute_parse, execute_show, execute_summary, DumpInput, ShowArgs, SummaryArgs,
};
use goroutine_grid::SignaturePolicy;

/// Goroutine Grid - goroutine dump analysis
#[derive(Parser, Debug)]
#[command(name = "grid")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// How stacks are compared when counting duplicates
    #[arg(long, global = true, value_enum, default_value_t = SignaturePolicy::Exact)]
    signature: SignaturePolicy,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a dump and report routine count and warnings
    Parse {
        /// Goroutine dump file
        file: PathBuf,
    },

    /// Print the function table, largest groups first
    Summary {
        /// Goroutine dump file
        file: PathBuf,

        /// Number of functions to list
        #[arg(long)]
        top: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print every distinct stack under one top-of-stack function
    Show {
        /// Goroutine dump file
        file: PathBuf,

        /// Function as printed in the summary table
        function: String,
    },
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let input = |file: PathBuf| DumpInput {
        path: file,
        signature_policy: cli.signature,
    };

    // Execute command
    match cli.command {
        Commands::Parse { file } => execute_parse(input(file))?,

        Commands::Summary { file, top, json } => execute_summary(SummaryArgs {
            input: input(file),
            top,
            json,
        })?,

        Commands::Show { file, function } => execute_show(ShowArgs {
            input: input(file),
            function,
        })?,
    }

    Ok(())
}
