//! Deterministic solitaire rules and data types.
//!
//! `solitaire-core` defines the canonical rules (cards, deal, stacking
//! predicates, supermove capacity, moves, engine) for FreeCell and Klondike
//! and exposes pure APIs that can be reused by sessions and offline tools.
//! All state mutation flows through [`engine::GameEngine`], and supporting
//! crates depend on the types re-exported here.
pub mod action;
pub mod config;
pub mod deck;
pub mod engine;
pub mod env;
pub mod error;
pub mod rules;
pub mod state;

pub use action::{
    CardSource, DrawMove, FoundationMove, FreeCellMove, Move, MoveRejection, MoveTransition,
    RecycleMove, TableauMove, TableauPlacement,
};
pub use config::{GameConfig, Variant};
pub use deck::{create_deck, shuffle};
pub use engine::{
    GameEngine, MoveOutcome, apply_move, has_legal_moves, init, is_won, legal_moves,
    safe_foundation_move,
};
pub use env::{RandomSource, SeededRng, create_rng};
pub use error::{ErrorSeverity, GameError};
pub use rules::{FoundationOptions, StackOptions, SupermoveError};
pub use state::{
    Card, CardColor, CardId, Column, DrawMode, Foundation, FreeCells, GamePhase, GameState, Rank,
    Reserve, StockPile, Suit,
};
