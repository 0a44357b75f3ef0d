//! Multi-card ("supermove") capacity.
//!
//! A run moves as a unit only if it is a valid tableau sequence and fits in
//! the capacity afforded by empty free cells and empty columns.

use crate::rules::is_valid_tableau_sequence;
use crate::state::{Card, GameState};

/// Why a run cannot move as a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SupermoveError {
    #[error("cards do not form a descending alternating sequence")]
    SequenceInvalid,

    #[error("run of {len} cards exceeds capacity {capacity}")]
    TooLarge { len: usize, capacity: usize },
}

/// `(empty_free_cells + 1) × 2^empty_columns`, saturating.
pub fn max_movable(empty_free_cells: usize, empty_columns: usize) -> usize {
    let factor = u32::try_from(empty_columns)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .unwrap_or(usize::MAX);
    empty_free_cells.saturating_add(1).saturating_mul(factor)
}

/// Capacity for a run moving onto column `destination`.
///
/// An empty destination is not counted as scratch space for its own move.
/// Variants without free cells have no capacity limit.
pub fn supermove_capacity(state: &GameState, destination: usize) -> usize {
    let Some(cells) = state.reserve.free_cells() else {
        return usize::MAX;
    };
    let empty_columns = state
        .tableau
        .iter()
        .enumerate()
        .filter(|(index, column)| *index != destination && column.is_empty())
        .count();
    max_movable(cells.empty_count(), empty_columns)
}

/// Validates `run` against the sequence rule first, then against `capacity`.
pub fn validate_supermove(run: &[Card], capacity: usize) -> Result<(), SupermoveError> {
    if !is_valid_tableau_sequence(run) {
        return Err(SupermoveError::SequenceInvalid);
    }
    if run.len() > capacity {
        return Err(SupermoveError::TooLarge {
            len: run.len(),
            capacity,
        });
    }
    Ok(())
}
