//! Single-card sources shared by the move kinds.

use core::fmt;

use crate::action::MoveRejection;
use crate::state::{Card, GameState};

/// Where a single card is taken from. Tableau sources always take the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CardSource {
    Tableau(usize),
    FreeCell(usize),
    Waste,
    Foundation(usize),
}

impl CardSource {
    /// The card this source would give up.
    pub fn peek(self, state: &GameState) -> Result<&Card, MoveRejection> {
        match self {
            CardSource::Tableau(column) => state
                .tableau
                .get(column)
                .ok_or(MoveRejection::NoSuchColumn { column })?
                .top()
                .ok_or(MoveRejection::SourceEmpty),
            CardSource::FreeCell(cell) => {
                let cells = state.free_cells().ok_or(MoveRejection::UnsupportedMove {
                    variant: state.variant(),
                })?;
                if cell >= cells.len() {
                    return Err(MoveRejection::NoSuchFreeCell { cell });
                }
                cells.get(cell).ok_or(MoveRejection::SourceEmpty)
            }
            CardSource::Waste => state
                .stock()
                .ok_or(MoveRejection::UnsupportedMove {
                    variant: state.variant(),
                })?
                .waste_top()
                .ok_or(MoveRejection::SourceEmpty),
            CardSource::Foundation(foundation) => state
                .foundations
                .get(foundation)
                .ok_or(MoveRejection::NoSuchFoundation { foundation })?
                .top()
                .ok_or(MoveRejection::SourceEmpty),
        }
    }

    /// Removes and returns the card, exposing whatever lies beneath it.
    pub(crate) fn take(self, state: &mut GameState) -> Result<Card, MoveRejection> {
        let variant = state.variant();
        match self {
            CardSource::Tableau(column) => state
                .tableau
                .get_mut(column)
                .ok_or(MoveRejection::NoSuchColumn { column })?
                .pop()
                .ok_or(MoveRejection::SourceEmpty),
            CardSource::FreeCell(cell) => state
                .reserve
                .free_cells_mut()
                .ok_or(MoveRejection::UnsupportedMove { variant })?
                .slot_mut(cell)
                .ok_or(MoveRejection::NoSuchFreeCell { cell })?
                .take()
                .ok_or(MoveRejection::SourceEmpty),
            CardSource::Waste => state
                .reserve
                .stock_mut()
                .ok_or(MoveRejection::UnsupportedMove { variant })?
                .waste
                .pop()
                .ok_or(MoveRejection::SourceEmpty),
            CardSource::Foundation(foundation) => state
                .foundations
                .get_mut(foundation)
                .ok_or(MoveRejection::NoSuchFoundation { foundation })?
                .pop()
                .ok_or(MoveRejection::SourceEmpty),
        }
    }
}

impl fmt::Display for CardSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardSource::Tableau(column) => write!(f, "tableau {column}"),
            CardSource::FreeCell(cell) => write!(f, "cell {cell}"),
            CardSource::Waste => write!(f, "waste"),
            CardSource::Foundation(foundation) => write!(f, "foundation {foundation}"),
        }
    }
}
