//! Authoritative game state representation.
//!
//! [`GameState`] is a plain value: every zone, the deal seed and the move
//! counter. Callers keep old snapshots for history; the engine produces new
//! ones and never edits a snapshot it has handed out.
mod card;
mod zones;

pub use card::{Card, CardColor, CardId, Rank, Suit};
pub use zones::{Column, DrawMode, Foundation, FreeCells, Reserve, StockPile};

use crate::config::{GameConfig, Variant};
use crate::deck::{create_deck, shuffle};
use crate::rules::StackOptions;

/// Lifecycle position of a game, derived from the snapshot itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GamePhase {
    /// Freshly dealt, no move applied.
    Dealt,
    InProgress,
    /// Every foundation is complete. Absorbing.
    Won,
}

/// Canonical snapshot of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Seed the deal was shuffled with. Never modified after the deal.
    pub seed: i64,

    /// Accepted transitions since the deal.
    pub moves: u32,

    pub tableau: Vec<Column>,
    pub foundations: [Foundation; GameConfig::FOUNDATIONS],
    pub reserve: Reserve,
}

impl GameState {
    /// Shuffles a fresh deck with `seed` and deals the configured variant.
    ///
    /// Pure in `(config, seed)`: equal inputs produce equal states.
    pub fn deal(config: &GameConfig, seed: i64) -> Self {
        let cards = shuffle(&create_deck(), seed);
        match config.variant {
            Variant::FreeCell => Self::deal_freecell(seed, cards, config.free_cells),
            Variant::Klondike => Self::deal_klondike(seed, cards, config.draw_mode),
        }
    }

    /// Round-robin into eight face-up columns (7/7/7/7/6/6/6/6).
    fn deal_freecell(seed: i64, cards: Vec<Card>, free_cells: usize) -> Self {
        let mut columns: Vec<Vec<Card>> = vec![Vec::new(); GameConfig::FREECELL_COLUMNS];
        for (index, card) in cards.into_iter().enumerate() {
            columns[index % GameConfig::FREECELL_COLUMNS].push(card);
        }
        let free_cells = free_cells.clamp(1, GameConfig::MAX_FREE_CELLS);
        Self::freecell_from_parts(
            seed,
            columns.into_iter().map(Column::new).collect(),
            FreeCells::new(free_cells),
            Default::default(),
        )
    }

    /// Row by row into seven staggered columns (column `i` holds `i + 1`
    /// cards, only the top face up); the remaining 24 cards form the stock.
    fn deal_klondike(seed: i64, cards: Vec<Card>, draw_mode: DrawMode) -> Self {
        let mut remaining = cards.into_iter();
        let mut columns: Vec<Vec<Card>> = vec![Vec::new(); GameConfig::KLONDIKE_COLUMNS];
        for row in 0..GameConfig::KLONDIKE_COLUMNS {
            for column in columns.iter_mut().skip(row) {
                if let Some(card) = remaining.next() {
                    column.push(card);
                }
            }
        }
        let tableau = columns
            .into_iter()
            .enumerate()
            .map(|(index, cards)| Column::with_face_down(cards, index))
            .collect();
        Self::klondike_from_parts(
            seed,
            tableau,
            StockPile::new(remaining.collect(), draw_mode),
            Default::default(),
        )
    }

    /// Assembles a FreeCell state from explicit zones (move counter zero).
    pub fn freecell_from_parts(
        seed: i64,
        tableau: Vec<Column>,
        free_cells: FreeCells,
        foundations: [Foundation; GameConfig::FOUNDATIONS],
    ) -> Self {
        Self {
            seed,
            moves: 0,
            tableau,
            foundations,
            reserve: Reserve::FreeCells(free_cells),
        }
    }

    /// Assembles a Klondike state from explicit zones (move counter zero).
    pub fn klondike_from_parts(
        seed: i64,
        tableau: Vec<Column>,
        stock: StockPile,
        foundations: [Foundation; GameConfig::FOUNDATIONS],
    ) -> Self {
        Self {
            seed,
            moves: 0,
            tableau,
            foundations,
            reserve: Reserve::Stock(stock),
        }
    }

    pub fn variant(&self) -> Variant {
        match self.reserve {
            Reserve::FreeCells(_) => Variant::FreeCell,
            Reserve::Stock(_) => Variant::Klondike,
        }
    }

    /// Placement rule for the tableau of this variant.
    pub fn tableau_options(&self) -> StackOptions {
        match self.variant() {
            Variant::FreeCell => StackOptions::FREECELL,
            Variant::Klondike => StackOptions::KLONDIKE,
        }
    }

    pub fn free_cells(&self) -> Option<&FreeCells> {
        self.reserve.free_cells()
    }

    pub fn stock(&self) -> Option<&StockPile> {
        self.reserve.stock()
    }

    /// True iff every foundation holds 13 cards.
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(Foundation::is_complete)
    }

    pub fn phase(&self) -> GamePhase {
        if self.is_won() {
            GamePhase::Won
        } else if self.moves == 0 {
            GamePhase::Dealt
        } else {
            GamePhase::InProgress
        }
    }

    /// Number of empty tableau columns.
    pub fn empty_columns(&self) -> usize {
        self.tableau.iter().filter(|column| column.is_empty()).count()
    }

    /// Every card in every zone.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.tableau
            .iter()
            .flat_map(|column| column.cards().iter())
            .chain(self.foundations.iter().flat_map(|pile| pile.cards().iter()))
            .chain(self.reserve.cards())
    }

    pub fn card_count(&self) -> usize {
        self.cards().count()
    }

    /// Sorted ids of every card in play; equals `0..52` for a legal state.
    pub fn card_ids(&self) -> Vec<CardId> {
        let mut ids: Vec<CardId> = self.cards().map(Card::id).collect();
        ids.sort_unstable();
        ids
    }

    /// True when the zones hold each of the 52 cards exactly once.
    pub fn is_complete_deck(&self) -> bool {
        self.card_ids()
            .into_iter()
            .enumerate()
            .all(|(index, id)| usize::from(id.0) == index)
            && self.card_count() == GameConfig::DECK_SIZE
    }

    /// SHA-256 over the layout: zone by zone, card by card, with zone
    /// boundaries and face-down counts. Identical layouts hash identically.
    pub fn layout_digest(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        hasher.update([self.variant() as u8]);
        hasher.update(self.seed.to_le_bytes());
        for column in &self.tableau {
            hasher.update([b'T', column.face_down_count() as u8]);
            hasher.update(column.cards().iter().map(|card| card.id().0).collect::<Vec<_>>());
        }
        for foundation in &self.foundations {
            hasher.update([b'F']);
            hasher.update(foundation.cards().iter().map(|card| card.id().0).collect::<Vec<_>>());
        }
        match &self.reserve {
            Reserve::FreeCells(cells) => {
                for slot in cells.slots() {
                    hasher.update([b'C', slot.map_or(u8::MAX, |card| card.id().0)]);
                }
            }
            Reserve::Stock(pile) => {
                hasher.update([b'S']);
                hasher.update(pile.stock().iter().map(|card| card.id().0).collect::<Vec<_>>());
                hasher.update([b'W']);
                hasher.update(pile.waste().iter().map(|card| card.id().0).collect::<Vec<_>>());
            }
        }
        hasher.finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freecell_layout() {
        let state = GameState::deal(&GameConfig::freecell(), 1);
        let sizes: Vec<usize> = state.tableau.iter().map(Column::len).collect();
        assert_eq!(sizes, vec![7, 7, 7, 7, 6, 6, 6, 6]);
        assert!(state.tableau.iter().all(|column| column.face_down_count() == 0));
        assert_eq!(state.free_cells().map(FreeCells::len), Some(4));
        assert_eq!(state.free_cells().map(FreeCells::empty_count), Some(4));
        assert!(state.is_complete_deck());
        assert_eq!(state.phase(), GamePhase::Dealt);
    }

    #[test]
    fn klondike_layout() {
        let state = GameState::deal(&GameConfig::klondike(DrawMode::Three), 1);
        for (index, column) in state.tableau.iter().enumerate() {
            assert_eq!(column.len(), index + 1);
            assert_eq!(column.face_down_count(), index);
            assert_eq!(column.face_up().len(), 1);
        }
        let stock = state.stock().expect("klondike has a stock");
        assert_eq!(stock.stock().len(), 24);
        assert!(stock.waste().is_empty());
        assert_eq!(stock.draw_mode, DrawMode::Three);
        assert!(state.is_complete_deck());
    }

    #[test]
    fn deal_is_pure_in_seed() {
        for seed in [-3, 0, 1, 2, 99_999] {
            for config in [GameConfig::freecell(), GameConfig::klondike(DrawMode::One)] {
                let a = GameState::deal(&config, seed);
                let b = GameState::deal(&config, seed);
                assert_eq!(a, b);
                assert_eq!(a.layout_digest(), b.layout_digest());
            }
        }
    }

    #[test]
    fn different_seeds_deal_differently() {
        let config = GameConfig::freecell();
        let a = GameState::deal(&config, 1);
        let b = GameState::deal(&config, 2);
        assert_ne!(a.tableau, b.tableau);
        assert_ne!(a.layout_digest(), b.layout_digest());
    }

    #[test]
    fn digest_tracks_the_layout() {
        let dealt = GameState::deal(&GameConfig::freecell(), 7);
        let printed = hex::encode(dealt.layout_digest());
        assert_eq!(printed.len(), 64);

        let mut moved = dealt.clone();
        moved.moves += 1;
        assert_eq!(hex::encode(moved.layout_digest()), printed);

        let mut first = moved.tableau[0].cards().to_vec();
        let mut second = moved.tableau[1].cards().to_vec();
        second.push(first.pop().expect("dealt column has cards"));
        moved.tableau[0] = Column::new(first);
        moved.tableau[1] = Column::new(second);
        assert_ne!(hex::encode(moved.layout_digest()), printed);
    }

    #[test]
    fn free_cell_count_is_configurable() {
        let state = GameState::deal(&GameConfig::freecell().with_free_cells(2), 5);
        assert_eq!(state.free_cells().map(FreeCells::len), Some(2));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn state_round_trips_through_json() {
        let state = GameState::deal(&GameConfig::klondike(DrawMode::One), 77);
        let json = serde_json::to_string(&state).expect("state serializes");
        let back: GameState = serde_json::from_str(&json).expect("state deserializes");
        assert_eq!(back, state);
    }
}
