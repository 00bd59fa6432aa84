mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "alchemy")]
#[command(version, about = "Data Alchemy dataset validation CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate CSV datasets and print per-row findings
    Validate {
        /// Path to the Clients CSV
        #[arg(long)]
        clients: Option<PathBuf>,

        /// Path to the Workers CSV
        #[arg(long)]
        workers: Option<PathBuf>,

        /// Path to the Tasks CSV
        #[arg(long)]
        tasks: Option<PathBuf>,

        /// Enable strict validation mode (fail when nothing was validated)
        #[arg(short, long)]
        strict: bool,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Validate and re-export the datasets as CSV
    Export {
        /// Path to the Clients CSV
        #[arg(long)]
        clients: Option<PathBuf>,

        /// Path to the Workers CSV
        #[arg(long)]
        workers: Option<PathBuf>,

        /// Path to the Tasks CSV
        #[arg(long)]
        tasks: Option<PathBuf>,

        /// Output directory for the exported files
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Translate a natural-language rule prompt (stub)
    Rule {
        /// Free-text rule prompt
        prompt: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            clients,
            workers,
            tasks,
            strict,
            format,
        } => commands::validate::execute(
            clients.as_deref(),
            workers.as_deref(),
            tasks.as_deref(),
            strict,
            &format,
        ),

        Commands::Export {
            clients,
            workers,
            tasks,
            out,
        } => commands::export::execute(clients.as_deref(), workers.as_deref(), tasks.as_deref(), &out),

        Commands::Rule { prompt } => commands::rule::execute(&prompt),
    }
}
