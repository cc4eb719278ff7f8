//! # lattices CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lattices_cli::generate::{run_default, run_init, InitArgs};
use lattices_cli::schema::run_schema;
use lattices_cli::validate::{run_validate, ValidateArgs};
use lattices_cli::EXIT_OPERATIONAL_ERROR;

/// Validate and scaffold lattice diagram configurations.
#[derive(Parser, Debug)]
#[command(name = "lattices", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a sticks configuration file.
    Validate(ValidateArgs),

    /// Print the default sticks configuration.
    Default,

    /// Write the default sticks configuration to a new file.
    Init(InitArgs),

    /// Print the JSON Schema of a sticks configuration.
    Schema,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "lattices CLI starting");

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Default => run_default(),
        Commands::Init(args) => run_init(&args),
        Commands::Schema => run_schema(),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_OPERATIONAL_ERROR)
        }
    }
}
