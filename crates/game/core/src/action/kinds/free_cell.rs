use crate::action::{CardSource, MoveRejection, MoveTransition};
use crate::state::GameState;

/// Parks a single card in an empty free cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FreeCellMove {
    pub source: CardSource,
    pub cell: usize,
}

impl FreeCellMove {
    pub fn new(source: CardSource, cell: usize) -> Self {
        Self { source, cell }
    }
}

impl MoveTransition for FreeCellMove {
    fn pre_validate(&self, state: &GameState) -> Result<(), MoveRejection> {
        let cells = state.free_cells().ok_or(MoveRejection::UnsupportedMove {
            variant: state.variant(),
        })?;
        if self.cell >= cells.len() {
            return Err(MoveRejection::NoSuchFreeCell { cell: self.cell });
        }
        if matches!(self.source, CardSource::Foundation(_)) {
            return Err(MoveRejection::UnsupportedMove {
                variant: state.variant(),
            });
        }
        self.source.peek(state)?;
        if cells.get(self.cell).is_some() {
            return Err(MoveRejection::DestinationOccupied);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<(), MoveRejection> {
        let card = self.source.take(state)?;
        let slot = state
            .reserve
            .free_cells_mut()
            .and_then(|cells| cells.slot_mut(self.cell))
            .ok_or(MoveRejection::NoSuchFreeCell { cell: self.cell })?;
        *slot = Some(card);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{Card, Column, DrawMode, FreeCells, Rank, Suit};

    fn card(suit: Suit, value: u8) -> Card {
        Card::new(suit, Rank::from_value(value).unwrap())
    }

    fn state() -> GameState {
        GameState::freecell_from_parts(
            0,
            vec![
                Column::new(vec![card(Suit::Clubs, 4), card(Suit::Hearts, 3)]),
                Column::default(),
            ],
            FreeCells::from_slots(vec![None, Some(card(Suit::Spades, 12))]),
            Default::default(),
        )
    }

    #[test]
    fn parks_top_card() {
        let mut state = state();
        let mv = FreeCellMove::new(CardSource::Tableau(0), 0);
        mv.pre_validate(&state).unwrap();
        mv.apply(&mut state).unwrap();

        let cells = state.free_cells().unwrap();
        assert_eq!(cells.get(0), Some(&card(Suit::Hearts, 3)));
        assert_eq!(state.tableau[0].len(), 1);
    }

    #[test]
    fn occupied_cell_is_rejected() {
        let state = state();
        assert_eq!(
            FreeCellMove::new(CardSource::Tableau(0), 1).pre_validate(&state),
            Err(MoveRejection::DestinationOccupied)
        );
    }

    #[test]
    fn cell_to_cell_is_allowed() {
        let mut state = state();
        let mv = FreeCellMove::new(CardSource::FreeCell(1), 0);
        mv.pre_validate(&state).unwrap();
        mv.apply(&mut state).unwrap();
        let cells = state.free_cells().unwrap();
        assert_eq!(cells.get(0), Some(&card(Suit::Spades, 12)));
        assert_eq!(cells.get(1), None);
    }

    #[test]
    fn empty_source_and_bad_indices() {
        let state = state();
        assert_eq!(
            FreeCellMove::new(CardSource::Tableau(1), 0).pre_validate(&state),
            Err(MoveRejection::SourceEmpty)
        );
        assert_eq!(
            FreeCellMove::new(CardSource::Tableau(0), 2).pre_validate(&state),
            Err(MoveRejection::NoSuchFreeCell { cell: 2 })
        );
    }

    #[test]
    fn klondike_has_no_free_cells() {
        let state = GameState::deal(&GameConfig::klondike(DrawMode::One), 3);
        assert!(matches!(
            FreeCellMove::new(CardSource::Tableau(0), 0).pre_validate(&state),
            Err(MoveRejection::UnsupportedMove { .. })
        ));
    }
}
