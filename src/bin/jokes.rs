//! Command-line client for the joke aggregation core.
//!
//! Talks to the joke providers directly, without starting the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Five hybrid jokes (or PAIRED_JOKES_COUNT)
//! cargo run --bin jokes -- paired
//!
//! # Ten of them
//! cargo run --bin jokes -- paired --count 10
//!
//! # A single joke from one provider
//! cargo run --bin jokes -- fetch chuck
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `CHUCK_NORRIS_API_URL`, `DAD_JOKE_API_URL`,
//! `UPSTREAM_TIMEOUT_SECS`, `PAIRED_JOKES_COUNT`, `MAX_PAIRED_JOKES_COUNT`.
//! Set `RUST_LOG=debug` to see individual upstream calls.

use hybrid_jokes::application::services::{JokeService, PairedJokesService};
use hybrid_jokes::config;
use hybrid_jokes::domain::entities::Provider;
use hybrid_jokes::server::build_sources;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

/// CLI tool for fetching and combining jokes.
#[derive(Parser)]
#[command(name = "jokes")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch both providers and print hybrid jokes
    Paired {
        /// Jokes to request from each provider
        #[arg(short, long)]
        count: Option<usize>,
    },

    /// Print a single joke from one provider
    Fetch {
        /// `chuck` or `dad`
        source: Provider,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::load_from_env()?;
    let sources = build_sources(&config)?;

    match cli.command {
        Commands::Paired { count } => {
            let count = count.unwrap_or(config.paired_jokes_count);
            if count == 0 || count > config.max_paired_jokes_count {
                bail!(
                    "--count must be between 1 and {}",
                    config.max_paired_jokes_count
                );
            }

            let service = PairedJokesService::new(sources.chuck, sources.dad);
            print_paired(&service, count).await?;
        }
        Commands::Fetch { source } => {
            let service = JokeService::new(vec![sources.chuck, sources.dad]);
            let joke = service.get_joke(source).await?;

            println!("{}", source.display_name().bright_blue().bold());
            println!("{joke}");
        }
    }

    Ok(())
}

async fn print_paired(service: &PairedJokesService, count: usize) -> Result<()> {
    println!(
        "{}",
        format!("Requesting {count} jokes from each provider...").bright_white()
    );
    println!();

    let pairs = service.get_paired_jokes(count).await?;

    for (i, pair) in pairs.iter().enumerate() {
        println!("{}", format!("#{}", i + 1).bright_blue().bold());
        println!("  {} {}", "chuck:".cyan(), pair.first);
        println!("  {} {}", "dad:  ".cyan(), pair.second);
        println!("  {} {}", "=>".green().bold(), pair.combined.to_string().bright_yellow());
        println!();
    }

    let summary = format!("{} of {} pairs", pairs.len(), count);
    if pairs.len() < count {
        println!("{} {}", summary.yellow(), "(some upstream calls failed)".yellow());
    } else {
        println!("{}", summary.green().bold());
    }

    Ok(())
}
