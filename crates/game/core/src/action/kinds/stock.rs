use crate::action::{MoveRejection, MoveTransition};
use crate::state::{GameState, StockPile};

fn stock_pile(state: &GameState) -> Result<&StockPile, MoveRejection> {
    state.stock().ok_or(MoveRejection::UnsupportedMove {
        variant: state.variant(),
    })
}

fn stock_pile_mut(state: &mut GameState) -> Result<&mut StockPile, MoveRejection> {
    let variant = state.variant();
    state
        .reserve
        .stock_mut()
        .ok_or(MoveRejection::UnsupportedMove { variant })
}

/// Turns over up to `draw_mode` cards from the stock onto the waste.
///
/// Cards move one at a time from the stock top to the waste top, so with a
/// three-card draw the third card drawn ends up playable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DrawMove;

impl MoveTransition for DrawMove {
    fn pre_validate(&self, state: &GameState) -> Result<(), MoveRejection> {
        if stock_pile(state)?.stock().is_empty() {
            return Err(MoveRejection::StockEmpty);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<(), MoveRejection> {
        let pile = stock_pile_mut(state)?;
        for _ in 0..pile.draw_mode.count() {
            let Some(card) = pile.stock.pop() else {
                break;
            };
            pile.waste.push(card);
        }
        Ok(())
    }
}

/// Turns the waste back over into a fresh stock once the stock is empty.
///
/// The waste is flipped as a whole, so the next pass draws the cards in the
/// same order as the previous one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RecycleMove;

impl MoveTransition for RecycleMove {
    fn pre_validate(&self, state: &GameState) -> Result<(), MoveRejection> {
        let pile = stock_pile(state)?;
        if !pile.stock().is_empty() {
            return Err(MoveRejection::StockNotEmpty);
        }
        if pile.waste().is_empty() {
            return Err(MoveRejection::WasteEmpty);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<(), MoveRejection> {
        let pile = stock_pile_mut(state)?;
        pile.stock = pile.waste.drain(..).rev().collect();
        pile.passes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{Card, Column, DrawMode, Rank, Suit};

    fn card(suit: Suit, value: u8) -> Card {
        Card::new(suit, Rank::from_value(value).unwrap())
    }

    fn state_with_stock(stock: Vec<Card>, draw_mode: DrawMode) -> GameState {
        GameState::klondike_from_parts(
            0,
            vec![Column::default()],
            StockPile::new(stock, draw_mode),
            Default::default(),
        )
    }

    #[test]
    fn draw_three_preserves_draw_order() {
        // Stock top is the last element: 5, then 4, then 3 come off.
        let stock = (1..=5).map(|value| card(Suit::Clubs, value)).collect();
        let mut state = state_with_stock(stock, DrawMode::Three);

        DrawMove.pre_validate(&state).unwrap();
        DrawMove.apply(&mut state).unwrap();

        let pile = state.stock().unwrap();
        assert_eq!(
            pile.waste(),
            &[card(Suit::Clubs, 5), card(Suit::Clubs, 4), card(Suit::Clubs, 3)]
        );
        assert_eq!(pile.waste_top(), Some(&card(Suit::Clubs, 3)));
        assert_eq!(pile.stock(), &[card(Suit::Clubs, 1), card(Suit::Clubs, 2)]);
    }

    #[test]
    fn short_stock_draws_what_is_left() {
        let mut state = state_with_stock(vec![card(Suit::Hearts, 9)], DrawMode::Three);
        DrawMove.apply(&mut state).unwrap();
        let pile = state.stock().unwrap();
        assert!(pile.stock().is_empty());
        assert_eq!(pile.waste().len(), 1);
        assert_eq!(DrawMove.pre_validate(&state), Err(MoveRejection::StockEmpty));
    }

    #[test]
    fn recycle_restores_original_stock_order() {
        let original: Vec<Card> = (1..=4).map(|value| card(Suit::Spades, value)).collect();
        let mut state = state_with_stock(original.clone(), DrawMode::One);

        assert_eq!(
            RecycleMove.pre_validate(&state),
            Err(MoveRejection::StockNotEmpty)
        );

        for _ in 0..original.len() {
            DrawMove.apply(&mut state).unwrap();
        }
        RecycleMove.pre_validate(&state).unwrap();
        RecycleMove.apply(&mut state).unwrap();

        let pile = state.stock().unwrap();
        assert_eq!(pile.stock(), original.as_slice());
        assert!(pile.waste().is_empty());
        assert_eq!(pile.passes, 1);
    }

    #[test]
    fn recycle_needs_a_waste() {
        let state = state_with_stock(vec![], DrawMode::One);
        assert_eq!(RecycleMove.pre_validate(&state), Err(MoveRejection::WasteEmpty));
    }

    #[test]
    fn freecell_has_no_stock() {
        let state = GameState::deal(&GameConfig::freecell(), 1);
        assert!(matches!(
            DrawMove.pre_validate(&state),
            Err(MoveRejection::UnsupportedMove { .. })
        ));
        assert!(matches!(
            RecycleMove.pre_validate(&state),
            Err(MoveRejection::UnsupportedMove { .. })
        ));
    }
}
