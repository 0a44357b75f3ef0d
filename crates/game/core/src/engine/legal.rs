//! Legal move enumeration for hints and dead-end detection.

use crate::action::{CardSource, Move};
use crate::state::GameState;

/// Single-card sources that currently hold a card, tableau tops first.
fn occupied_sources(state: &GameState) -> Vec<CardSource> {
    let mut sources: Vec<CardSource> = state
        .tableau
        .iter()
        .enumerate()
        .filter(|(_, column)| !column.is_empty())
        .map(|(index, _)| CardSource::Tableau(index))
        .collect();
    if let Some(cells) = state.free_cells() {
        sources.extend(
            cells
                .slots()
                .iter()
                .enumerate()
                .filter(|(_, slot)| slot.is_some())
                .map(|(index, _)| CardSource::FreeCell(index)),
        );
    }
    if state.stock().is_some_and(|pile| pile.waste_top().is_some()) {
        sources.push(CardSource::Waste);
    }
    sources
}

fn is_legal(state: &GameState, mv: &Move) -> bool {
    mv.transition().pre_validate(state).is_ok()
}

/// Every move the engine would accept from `state`.
///
/// Moves that only shuffle cards without changing the position are left
/// out: relocating a whole column onto an empty column, and moving a card
/// between two free cells. Only the first empty free cell is offered as a
/// destination.
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let mut moves = Vec::new();
    if state.is_won() {
        return moves;
    }
    let sources = occupied_sources(state);

    for source in &sources {
        for foundation in 0..state.foundations.len() {
            let mv = Move::to_foundation(*source, foundation);
            if is_legal(state, &mv) {
                moves.push(mv);
            }
        }
    }

    for (from, column) in state.tableau.iter().enumerate() {
        for start in column.first_face_up()..column.len() {
            for (to, destination) in state.tableau.iter().enumerate() {
                if start == 0 && destination.is_empty() {
                    continue;
                }
                let mv = Move::tableau(from, start, to);
                if is_legal(state, &mv) {
                    moves.push(mv);
                }
            }
        }
    }

    for source in sources.iter().filter(|source| !matches!(source, CardSource::Tableau(_))) {
        for to in 0..state.tableau.len() {
            let mv = Move::to_tableau(*source, to);
            if is_legal(state, &mv) {
                moves.push(mv);
            }
        }
    }
    for (index, foundation) in state.foundations.iter().enumerate() {
        if foundation.is_empty() {
            continue;
        }
        for to in 0..state.tableau.len() {
            let mv = Move::to_tableau(CardSource::Foundation(index), to);
            if is_legal(state, &mv) {
                moves.push(mv);
            }
        }
    }

    if let Some(cell) = state
        .free_cells()
        .and_then(|cells| cells.slots().iter().position(Option::is_none))
    {
        for source in sources
            .iter()
            .filter(|source| matches!(source, CardSource::Tableau(_)))
        {
            moves.push(Move::to_free_cell(*source, cell));
        }
    }

    for mv in [Move::Draw, Move::Recycle] {
        if is_legal(state, &mv) {
            moves.push(mv);
        }
    }
    moves
}

/// True when at least one move is available.
pub fn has_legal_moves(state: &GameState) -> bool {
    !legal_moves(state).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::engine::apply_move;
    use crate::state::{Card, Column, DrawMode, FreeCells, Rank, StockPile, Suit};

    fn card(suit: Suit, value: u8) -> Card {
        Card::new(suit, Rank::from_value(value).unwrap())
    }

    #[test]
    fn every_listed_move_is_accepted() {
        for seed in 1..20 {
            for config in [GameConfig::freecell(), GameConfig::klondike(DrawMode::Three)] {
                let state = GameState::deal(&config, seed);
                let moves = legal_moves(&state);
                assert!(!moves.is_empty());
                for mv in moves {
                    assert!(apply_move(&state, &mv).is_ok(), "{mv} rejected for seed {seed}");
                }
            }
        }
    }

    #[test]
    fn fresh_freecell_deal_offers_cell_moves() {
        let state = GameState::deal(&GameConfig::freecell(), 7);
        let cell_moves = legal_moves(&state)
            .into_iter()
            .filter(|mv| matches!(mv, Move::ToFreeCell(_)))
            .count();
        assert_eq!(cell_moves, 8);
    }

    #[test]
    fn dead_end_has_no_moves() {
        // Two red sevens in full cells, nothing stacks, nothing goes up.
        let state = GameState::freecell_from_parts(
            0,
            vec![Column::new(vec![card(Suit::Hearts, 5)])],
            FreeCells::from_slots(vec![Some(card(Suit::Hearts, 7)), Some(card(Suit::Diamonds, 7))]),
            Default::default(),
        );
        assert!(!has_legal_moves(&state));
    }

    #[test]
    fn exhausted_klondike_only_recycles() {
        let state = GameState::klondike_from_parts(
            0,
            vec![Column::new(vec![card(Suit::Spades, 5)])],
            StockPile::with_waste(vec![], vec![card(Suit::Clubs, 9)], DrawMode::One),
            Default::default(),
        );
        assert_eq!(legal_moves(&state), vec![Move::Recycle]);
    }
}
