//! Callmatch CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "callmatch")]
#[command(about = "Classify how a call site changed between two versions of a codebase", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// TOML file with matching thresholds
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the two call sites described in a JSON request file
    Compare {
        /// Path to the request (`before`, `after` and optional context)
        request: PathBuf,
    },
    /// Print the normalized edit distance between two names
    Distance {
        first: String,
        second: String,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "callmatch={log_level},callmatch_core={log_level}"
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Compare { request } => {
            let config = commands::load_config(cli.config.as_deref())?;
            commands::compare(&request, config)
        }
        Commands::Distance { first, second } => {
            commands::distance(&first, &second);
            Ok(())
        }
        Commands::Version => {
            println!("callmatch v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
