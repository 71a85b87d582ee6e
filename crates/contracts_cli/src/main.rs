mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dce")]
#[command(version, about = "Data Contracts Engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a contract as an Open Data Product Specification document
    Export {
        /// Path to the contract file (YAML, TOML or JSON)
        contract: String,

        /// Output format: yaml, json (defaults to the output file extension, then yaml)
        #[arg(short, long)]
        format: Option<String>,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Write JSON on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Check that a contract can be loaded and print a summary
    Check {
        /// Path to the contract file (YAML, TOML or JSON)
        contract: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing, RUST_LOG overrides the --verbose level
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Logs go to stderr, stdout carries the exported document
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Export {
            contract,
            format,
            output,
            compact,
        } => commands::export::execute(&contract, format.as_deref(), output.as_deref(), compact),

        Commands::Check { contract, format } => commands::check::execute(&contract, &format),
    }
}
