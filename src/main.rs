// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Affinity poet CLI - bridge-word poetry from a text corpus

use affinity_poet::commands;
use affinity_poet::commands::export::ExportFormat;
use affinity_poet::config;
use affinity_poet::poet::BridgeMetric;
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "affinity-poet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "AFFINITY_POET_CONFIG", global = true)]
    config: Option<std::path::PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert bridge words into text using a corpus
    Poem {
        /// Corpus file to build the affinity graph from
        #[arg(long)]
        corpus: std::path::PathBuf,

        /// Bridge metric (sum, product, min); overrides the config file
        #[arg(short, long)]
        metric: Option<BridgeMetric>,

        /// Input text (read from stdin if omitted)
        text: Vec<String>,
    },

    /// Export the affinity graph of a corpus
    Export {
        /// Corpus file to build the affinity graph from
        #[arg(long)]
        corpus: std::path::PathBuf,

        /// Output format (dot, json)
        #[arg(short, long, default_value = "dot")]
        format: ExportFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Initialize logging; RUST_LOG wins over flags and config
    let log_level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Poem { corpus, metric, text } => {
            commands::poem::run(&corpus, metric.unwrap_or(config.metric), &text, cli.json)
        }
        Commands::Export { corpus, format, output } => {
            let format = if cli.json { ExportFormat::Json } else { format };
            commands::export::run(&corpus, format, output)
        }
        Commands::Completions { shell } => commands::completions::run(shell, &mut Cli::command()),
    }
}
