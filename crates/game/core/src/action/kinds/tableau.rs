use crate::action::{MoveRejection, MoveTransition};
use crate::rules::{
    check_stack_descending, is_valid_tableau_sequence, supermove_capacity, validate_supermove,
};
use crate::state::{Card, GameState};

/// Moves the run starting at `start` in column `from` onto column `to`.
///
/// A single-card run is an ordinary tableau move; longer runs are supermoves
/// and are subject to the free-cell/empty-column capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableauMove {
    pub from: usize,
    pub start: usize,
    pub to: usize,
}

impl TableauMove {
    pub fn new(from: usize, start: usize, to: usize) -> Self {
        Self { from, start, to }
    }

    fn run<'s>(&self, state: &'s GameState) -> Result<&'s [Card], MoveRejection> {
        let column = state
            .tableau
            .get(self.from)
            .ok_or(MoveRejection::NoSuchColumn { column: self.from })?;
        if column.is_empty() {
            return Err(MoveRejection::SourceEmpty);
        }
        let run = column
            .run_from(self.start)
            .filter(|run| !run.is_empty())
            .ok_or(MoveRejection::NoSuchCard {
                column: self.from,
                index: self.start,
            })?;
        if !column.is_face_up(self.start) {
            return Err(MoveRejection::CardFaceDown {
                column: self.from,
                index: self.start,
            });
        }
        Ok(run)
    }
}

impl MoveTransition for TableauMove {
    fn pre_validate(&self, state: &GameState) -> Result<(), MoveRejection> {
        if self.from == self.to {
            return Err(MoveRejection::SameColumn);
        }
        let destination = state
            .tableau
            .get(self.to)
            .ok_or(MoveRejection::NoSuchColumn { column: self.to })?;
        let run = self.run(state)?;

        if !is_valid_tableau_sequence(run) {
            return Err(MoveRejection::SequenceInvalid);
        }
        check_stack_descending(&run[0], destination.top(), state.tableau_options())?;
        validate_supermove(run, supermove_capacity(state, self.to))?;
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<(), MoveRejection> {
        let run = state
            .tableau
            .get_mut(self.from)
            .ok_or(MoveRejection::NoSuchColumn { column: self.from })?
            .split_off(self.start);
        state
            .tableau
            .get_mut(self.to)
            .ok_or(MoveRejection::NoSuchColumn { column: self.to })?
            .extend(run);
        Ok(())
    }
}
