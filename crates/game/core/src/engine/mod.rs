//! Move execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! accepted move flows through the same three phases
//! (pre_validate → apply → post_validate) on a private copy of the state,
//! which replaces the caller's state only once all phases and the card
//! conservation check pass.

mod autoplay;
mod legal;

pub use autoplay::{is_safe_to_autoplay, safe_foundation_move};
pub use legal::{has_legal_moves, legal_moves};

use crate::action::{Move, MoveRejection};
use crate::config::GameConfig;
use crate::state::{GamePhase, GameState};

/// What an accepted move did beyond relocating cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOutcome {
    /// Phase of the state after the move.
    pub phase: GamePhase,

    /// Column whose new top card was turned face up, if any.
    pub revealed: Option<usize>,
}

impl MoveOutcome {
    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }
}

/// Applies moves to a borrowed state.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Executes `mv`, incrementing the move counter on success.
    ///
    /// On rejection the borrowed state is left exactly as it was.
    pub fn execute(&mut self, mv: &Move) -> Result<MoveOutcome, MoveRejection> {
        if self.state.is_won() {
            return Err(MoveRejection::GameWon);
        }

        let transition = mv.transition();
        let mut next = self.state.clone();
        transition.pre_validate(&next)?;
        transition.apply(&mut next)?;
        transition.post_validate(&next)?;

        let expected = self.state.card_count();
        let actual = next.card_count();
        if expected != actual {
            return Err(MoveRejection::CardCountMismatch { expected, actual });
        }

        let revealed = next
            .tableau
            .iter()
            .zip(&self.state.tableau)
            .position(|(after, before)| after.face_down_count() < before.face_down_count());

        next.moves += 1;
        *self.state = next;

        Ok(MoveOutcome {
            phase: self.state.phase(),
            revealed,
        })
    }
}

/// Deterministic initial deal for `config` and `seed`.
pub fn init(config: &GameConfig, seed: i64) -> GameState {
    GameState::deal(config, seed)
}

/// Pure transition: returns the successor of `state`, leaving `state` as is.
pub fn apply_move(state: &GameState, mv: &Move) -> Result<GameState, MoveRejection> {
    let mut next = state.clone();
    GameEngine::new(&mut next).execute(mv)?;
    Ok(next)
}

pub fn is_won(state: &GameState) -> bool {
    state.is_won()
}
