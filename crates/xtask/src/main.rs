//! Development tasks for the solitaire workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Deal, Replay, VerifySeeds};
use tracing_subscriber::EnvFilter;

/// Development tasks for the solitaire workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for solitaire", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Show the deal for a seed
    Deal(Deal),

    /// Apply a JSON move script to a seeded deal
    Replay(Replay),

    /// Re-deal a seed range and check determinism
    VerifySeeds(VerifySeeds),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for SOLITAIRE_* variables)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(tracing::Level::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Deal(cmd) => cmd.execute(),
        Command::Replay(cmd) => cmd.execute(),
        Command::VerifySeeds(cmd) => cmd.execute(),
    }
}
