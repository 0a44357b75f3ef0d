use crate::action::MoveRejection;
use crate::state::GameState;

/// Defines how a concrete move kind validates and mutates a game state.
///
/// The engine runs the hooks on a private copy of the state, so a failed
/// hook never leaks a half-applied move to the caller.
pub trait MoveTransition {
    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState) -> Result<(), MoveRejection> {
        Ok(())
    }

    /// Applies the move by mutating the state directly. Implementations may
    /// assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut GameState) -> Result<(), MoveRejection>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState) -> Result<(), MoveRejection> {
        Ok(())
    }
}
