//! Session configuration and environment loading.
use std::env;

use serde::{Deserialize, Serialize};
use solitaire_core::{DrawMode, GameConfig, Variant};

/// Configuration for one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub game: GameConfig,
    /// Undo depth. Never below one.
    pub history_limit: usize,
    /// Fixed deal seed; a random one is drawn per game when absent.
    pub seed: Option<i64>,
}

impl SessionConfig {
    pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

    pub fn new(game: GameConfig) -> Self {
        Self {
            game,
            history_limit: Self::DEFAULT_HISTORY_LIMIT,
            seed: None,
        }
    }

    pub fn with_history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit.max(1);
        self
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SOLITAIRE_VARIANT` - `freecell` or `klondike` (default: freecell)
    /// - `SOLITAIRE_DRAW_MODE` - `one`/`1` or `three`/`3` (default: one)
    /// - `SOLITAIRE_FREE_CELLS` - Free cells for FreeCell, 1..=8 (default: 4)
    /// - `SOLITAIRE_HISTORY_LIMIT` - Undo depth (default: 1000)
    /// - `SOLITAIRE_SEED` - Fixed deal seed (default: random per game)
    ///
    /// Unparsable values fall back to the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(variant) = read_env::<Variant>("SOLITAIRE_VARIANT") {
            config.game = config.game.with_variant(variant);
        }
        if let Some(draw_mode) = read_env::<DrawMode>("SOLITAIRE_DRAW_MODE") {
            config.game = config.game.with_draw_mode(draw_mode);
        }
        if let Some(free_cells) = read_env::<usize>("SOLITAIRE_FREE_CELLS") {
            config.game = config.game.with_free_cells(free_cells);
        }
        if let Some(limit) = read_env::<usize>("SOLITAIRE_HISTORY_LIMIT") {
            config.history_limit = limit.max(1);
        }
        config.seed = read_env::<i64>("SOLITAIRE_SEED");

        config
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
