//! Safe automatic moves to the foundations.

use crate::action::{CardSource, FoundationMove, Move, MoveTransition};
use crate::state::{Card, GameState, Suit};

/// Foundation height for `suit`, zero when the suit has not started.
fn suit_height(state: &GameState, suit: Suit) -> u8 {
    state
        .foundations
        .iter()
        .find(|foundation| foundation.suit() == Some(suit))
        .map_or(0, |foundation| foundation.top_value())
}

/// A card may go up without ever being needed on the tableau again.
///
/// Aces and twos are always safe. Anything higher is safe once both
/// foundations of the opposite colour hold at least `rank - 1`, since no
/// tableau card could still need it as a landing spot.
pub fn is_safe_to_autoplay(state: &GameState, card: &Card) -> bool {
    let rank = card.rank.value();
    if rank <= 2 {
        return true;
    }
    Suit::ALL
        .iter()
        .filter(|suit| suit.color() != card.color())
        .all(|&suit| suit_height(state, suit) >= rank - 1)
}

/// First safe foundation move, scanning tableau tops, free cells, then the
/// waste.
pub fn safe_foundation_move(state: &GameState) -> Option<Move> {
    if state.is_won() {
        return None;
    }
    let mut sources: Vec<CardSource> = (0..state.tableau.len()).map(CardSource::Tableau).collect();
    if let Some(cells) = state.free_cells() {
        sources.extend((0..cells.len()).map(CardSource::FreeCell));
    }
    if state.stock().is_some() {
        sources.push(CardSource::Waste);
    }

    sources.into_iter().find_map(|source| {
        let card = source.peek(state).ok()?;
        if !is_safe_to_autoplay(state, card) {
            return None;
        }
        (0..state.foundations.len()).find_map(|foundation| {
            let mv = FoundationMove::new(source, foundation);
            mv.pre_validate(state).ok().map(|()| Move::ToFoundation(mv))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Column, Foundation, FreeCells, Rank};

    fn card(suit: Suit, value: u8) -> Card {
        Card::new(suit, Rank::from_value(value).unwrap())
    }

    fn foundation(suit: Suit, height: u8) -> Foundation {
        Foundation::new((1..=height).map(|value| card(suit, value)).collect())
    }

    #[test]
    fn low_cards_are_always_safe() {
        let state = GameState::freecell_from_parts(
            0,
            vec![Column::new(vec![card(Suit::Hearts, 1)])],
            FreeCells::new(4),
            Default::default(),
        );
        assert!(is_safe_to_autoplay(&state, &card(Suit::Hearts, 1)));
        assert!(is_safe_to_autoplay(&state, &card(Suit::Hearts, 2)));
        assert_eq!(
            safe_foundation_move(&state),
            Some(Move::to_foundation(CardSource::Tableau(0), 0))
        );
    }

    #[test]
    fn higher_cards_wait_for_opposite_colour() {
        let mut state = GameState::freecell_from_parts(
            0,
            vec![Column::new(vec![card(Suit::Hearts, 4)])],
            FreeCells::new(4),
            [
                foundation(Suit::Hearts, 3),
                foundation(Suit::Clubs, 3),
                foundation(Suit::Spades, 2),
                Foundation::default(),
            ],
        );
        // Four of hearts could still hold the black three of spades.
        assert_eq!(safe_foundation_move(&state), None);

        state.foundations[2] = foundation(Suit::Spades, 3);
        assert_eq!(
            safe_foundation_move(&state),
            Some(Move::to_foundation(CardSource::Tableau(0), 0))
        );
    }

    #[test]
    fn free_cells_are_scanned() {
        let state = GameState::freecell_from_parts(
            0,
            vec![Column::new(vec![card(Suit::Clubs, 9)])],
            FreeCells::from_slots(vec![None, Some(card(Suit::Diamonds, 1))]),
            Default::default(),
        );
        assert_eq!(
            safe_foundation_move(&state),
            Some(Move::to_foundation(CardSource::FreeCell(1), 0))
        );
    }
}
