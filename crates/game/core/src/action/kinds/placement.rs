use crate::action::{CardSource, MoveRejection, MoveTransition, TableauMove};
use crate::rules::check_stack_descending;
use crate::state::GameState;

/// Places a single card from a free cell, the waste or a foundation onto a
/// tableau column. A tableau source moves that column's top card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableauPlacement {
    pub source: CardSource,
    pub to: usize,
}

impl TableauPlacement {
    pub fn new(source: CardSource, to: usize) -> Self {
        Self { source, to }
    }

    /// Tableau sources are single-card tableau moves.
    fn as_tableau_move(&self, state: &GameState) -> Option<TableauMove> {
        match self.source {
            CardSource::Tableau(from) => {
                let start = state
                    .tableau
                    .get(from)
                    .map_or(0, |column| column.len().saturating_sub(1));
                Some(TableauMove::new(from, start, self.to))
            }
            _ => None,
        }
    }
}

impl MoveTransition for TableauPlacement {
    fn pre_validate(&self, state: &GameState) -> Result<(), MoveRejection> {
        if let Some(tableau_move) = self.as_tableau_move(state) {
            return tableau_move.pre_validate(state);
        }
        let destination = state
            .tableau
            .get(self.to)
            .ok_or(MoveRejection::NoSuchColumn { column: self.to })?;
        let card = self.source.peek(state)?;
        check_stack_descending(card, destination.top(), state.tableau_options())?;
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<(), MoveRejection> {
        if let Some(tableau_move) = self.as_tableau_move(state) {
            return tableau_move.apply(state);
        }
        let card = self.source.take(state)?;
        state
            .tableau
            .get_mut(self.to)
            .ok_or(MoveRejection::NoSuchColumn { column: self.to })?
            .push(card);
        Ok(())
    }
}
