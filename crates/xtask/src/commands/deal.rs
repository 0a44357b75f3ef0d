//! Show the initial deal for a seed.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use solitaire_core::{engine, legal_moves};

use crate::utils::{GameArgs, digest_hex, print_layout, print_summary};

/// Show the deal for a seed
#[derive(Parser)]
pub struct Deal {
    /// Deal seed (defaults to SOLITAIRE_SEED, then 1)
    #[arg(value_name = "SEED", allow_negative_numbers = true)]
    seed: Option<i64>,

    #[command(flatten)]
    game: GameArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Layout, digest and opening moves
    Summary,
    /// Full JSON output
    Json,
    /// Pretty-printed debug format
    Debug,
}

impl Deal {
    pub fn execute(self) -> Result<()> {
        let config = self.game.session_config();
        let seed = self.seed.or(config.seed).unwrap_or(1);
        let state = engine::init(&config.game, seed);
        tracing::debug!(seed, variant = %config.game.variant, "dealt");

        match self.format {
            OutputFormat::Summary => {
                print_summary(&state);
                println!();
                print_layout(&state);
                println!();
                let moves = legal_moves(&state);
                println!(
                    "{} {}",
                    style("Opening moves:").bold().yellow(),
                    moves.len()
                );
                for mv in moves.iter().take(10) {
                    println!("  {mv}");
                }
                println!("{} {}", style("Digest:").bold().cyan(), digest_hex(&state));
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&state)
                    .context("Failed to serialize state to JSON")?;
                println!("{json}");
            }
            OutputFormat::Debug => println!("{state:#?}"),
        }
        Ok(())
    }
}
