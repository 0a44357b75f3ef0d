//! Replay a move script against a seeded deal.
//!
//! The script is a JSON array of moves, e.g.
//! `[{"kind":"draw"},{"kind":"to_foundation","source":"waste","foundation":0}]`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use session::GameSession;
use solitaire_core::{GameError, Move};

use crate::utils::{GameArgs, print_layout, print_summary};

/// Apply a JSON move script to a seeded deal
#[derive(Parser)]
pub struct Replay {
    /// Path to the JSON move script
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Deal seed (defaults to SOLITAIRE_SEED, then 1)
    #[arg(short, long, allow_negative_numbers = true)]
    seed: Option<i64>,

    #[command(flatten)]
    game: GameArgs,

    /// Play safe foundation moves after each accepted move
    #[arg(long)]
    autoplay: bool,

    /// Stop at the first rejected move
    #[arg(long)]
    strict: bool,

    /// Print the final layout
    #[arg(long)]
    show: bool,
}

impl Replay {
    pub fn execute(self) -> Result<()> {
        let text = std::fs::read_to_string(&self.script)
            .with_context(|| format!("Failed to read script: {}", self.script.display()))?;
        let moves: Vec<Move> = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse move script: {}", self.script.display()))?;

        let config = self.game.session_config();
        let seed = self.seed.or(config.seed).unwrap_or(1);
        let mut session = GameSession::new(config.with_seed(seed));

        let mut rejected = 0usize;
        for (index, mv) in moves.iter().enumerate() {
            match session.apply(mv) {
                Ok(outcome) => {
                    let revealed = outcome
                        .revealed
                        .map(|column| format!(" (revealed column {column})"))
                        .unwrap_or_default();
                    println!("{:>4} {} {mv}{revealed}", index, style("ok").green());
                    if self.autoplay {
                        let played = session.autoplay()?;
                        if played > 0 {
                            println!("     {} {played} to foundations", style("auto").cyan());
                        }
                    }
                }
                Err(error) => {
                    rejected += 1;
                    println!(
                        "{:>4} {} {mv}: {error} [{}]",
                        index,
                        style("rejected").red(),
                        error.error_code()
                    );
                    if self.strict {
                        anyhow::bail!("move {index} rejected: {error}");
                    }
                }
            }
        }

        println!();
        let state = session.state()?;
        print_summary(state);
        println!(
            "{} {} applied, {} rejected",
            style("Script:").bold().cyan(),
            moves.len() - rejected,
            rejected
        );
        if self.show {
            println!();
            print_layout(state);
        }
        Ok(())
    }
}
