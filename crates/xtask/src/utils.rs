//! Utility functions for xtask commands

use clap::Args;
use console::style;
use session::SessionConfig;
use solitaire_core::{Card, Column, DrawMode, GameState, Reserve, Variant};

/// Game selection shared by every command. Flags override `SOLITAIRE_*`
/// environment variables.
#[derive(Args, Clone, Debug)]
pub struct GameArgs {
    /// Game variant (freecell, klondike)
    #[arg(long, value_parser = parse_variant)]
    pub variant: Option<Variant>,

    /// Klondike draw mode (one, three)
    #[arg(long, value_parser = parse_draw_mode)]
    pub draw_mode: Option<DrawMode>,

    /// FreeCell free cell count (1-8)
    #[arg(long)]
    pub free_cells: Option<usize>,
}

impl GameArgs {
    pub fn session_config(&self) -> SessionConfig {
        let mut config = SessionConfig::from_env();
        if let Some(variant) = self.variant {
            config.game = config.game.with_variant(variant);
        }
        if let Some(draw_mode) = self.draw_mode {
            config.game = config.game.with_draw_mode(draw_mode);
        }
        if let Some(free_cells) = self.free_cells {
            config.game = config.game.with_free_cells(free_cells);
        }
        config
    }
}

fn parse_variant(value: &str) -> Result<Variant, String> {
    value
        .parse()
        .map_err(|_| format!("unknown variant `{value}` (expected freecell or klondike)"))
}

fn parse_draw_mode(value: &str) -> Result<DrawMode, String> {
    value
        .parse()
        .map_err(|_| format!("unknown draw mode `{value}` (expected one or three)"))
}

pub fn digest_hex(state: &GameState) -> String {
    hex::encode(state.layout_digest())
}

fn card_label(card: &Card) -> String {
    format!("{:>3}", card.id().to_string())
}

fn column_line(column: &Column) -> String {
    column
        .cards()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            if column.is_face_up(index) {
                card_label(card)
            } else {
                " ##".to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prints zones one per line.
pub fn print_layout(state: &GameState) {
    println!("{}", style("Foundations:").bold().yellow());
    let foundations: Vec<String> = state
        .foundations
        .iter()
        .map(|pile| pile.top().map_or_else(|| "  -".to_string(), card_label))
        .collect();
    println!("  {}", foundations.join(" "));

    match &state.reserve {
        Reserve::FreeCells(cells) => {
            println!("{}", style("Free cells:").bold().yellow());
            let slots: Vec<String> = cells
                .slots()
                .iter()
                .map(|slot| slot.as_ref().map_or_else(|| "  .".to_string(), card_label))
                .collect();
            println!("  {}", slots.join(" "));
        }
        Reserve::Stock(pile) => {
            println!("{}", style("Stock / waste:").bold().yellow());
            println!(
                "  stock {} | waste {} (top {}) | passes {}",
                pile.stock().len(),
                pile.waste().len(),
                pile.waste_top().map_or_else(|| "-".to_string(), |card| card.id().to_string()),
                pile.passes
            );
        }
    }

    println!("{}", style("Tableau:").bold().yellow());
    for (index, column) in state.tableau.iter().enumerate() {
        println!("  {index}: {}", column_line(column));
    }
}

/// One-line summary used after each command.
pub fn print_summary(state: &GameState) {
    let variant = match state.variant() {
        Variant::FreeCell => style(state.variant().to_string()).cyan(),
        Variant::Klondike => style(state.variant().to_string()).magenta(),
    };
    println!(
        "{} seed {} | moves {} | phase {} | digest {}",
        variant,
        state.seed,
        state.moves,
        style(state.phase()).bold(),
        &digest_hex(state)[..16]
    );
}
