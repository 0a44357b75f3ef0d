use crate::action::{CardSource, MoveRejection, MoveTransition};
use crate::rules::{FoundationOptions, check_stack_on_foundation};
use crate::state::GameState;

/// Sends a single top card to a foundation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoundationMove {
    pub source: CardSource,
    pub foundation: usize,
}

impl FoundationMove {
    pub fn new(source: CardSource, foundation: usize) -> Self {
        Self { source, foundation }
    }
}

impl MoveTransition for FoundationMove {
    fn pre_validate(&self, state: &GameState) -> Result<(), MoveRejection> {
        let pile = state
            .foundations
            .get(self.foundation)
            .ok_or(MoveRejection::NoSuchFoundation {
                foundation: self.foundation,
            })?;
        if matches!(self.source, CardSource::Foundation(_)) {
            return Err(MoveRejection::UnsupportedMove {
                variant: state.variant(),
            });
        }
        let card = self.source.peek(state)?;
        check_stack_on_foundation(card, pile.cards(), FoundationOptions::default())?;
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<(), MoveRejection> {
        let card = self.source.take(state)?;
        state
            .foundations
            .get_mut(self.foundation)
            .ok_or(MoveRejection::NoSuchFoundation {
                foundation: self.foundation,
            })?
            .push(card);
        Ok(())
    }
}
