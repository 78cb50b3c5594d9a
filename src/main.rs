#![forbid(unsafe_code)]
//! Primecheck Command Line Interface

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use primecheck::commands::{execute_check, CheckOptions};

#[derive(Parser)]
#[command(name = "primecheck")]
#[command(about = "Trial-division primality checking")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether an integer is prime
    Check {
        /// Candidate integer
        candidate: String,

        /// Output as JSON (default: human-readable)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check { candidate, json } => {
            let options = CheckOptions { candidate, json };
            execute_check(options)?;
        }
    }

    Ok(())
}
