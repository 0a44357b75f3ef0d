//! Card zones: tableau columns, foundations, free cells, stock and waste.
//!
//! Every zone is an ordered sequence whose last element is the exposed top.

use crate::state::{Card, Suit};

/// A tableau column. The first `face_down` cards are hidden; only the
/// face-up suffix is interactive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    cards: Vec<Card>,
    face_down: usize,
}

impl Column {
    /// Creates an all face-up column.
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            face_down: 0,
        }
    }

    /// Creates a column whose first `face_down` cards are hidden.
    ///
    /// A non-empty column always shows its top card, so the hidden count is
    /// capped at `len - 1`.
    pub fn with_face_down(cards: Vec<Card>, face_down: usize) -> Self {
        let face_down = face_down.min(cards.len().saturating_sub(1));
        Self { cards, face_down }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn face_down_count(&self) -> usize {
        self.face_down
    }

    /// Index of the first face-up card (equals `len` when empty).
    pub fn first_face_up(&self) -> usize {
        self.face_down
    }

    pub fn face_up(&self) -> &[Card] {
        self.cards.get(self.face_down..).unwrap_or(&[])
    }

    pub fn is_face_up(&self, index: usize) -> bool {
        index >= self.face_down && index < self.cards.len()
    }

    /// Cards from `start` to the top.
    pub fn run_from(&self, start: usize) -> Option<&[Card]> {
        self.cards.get(start..)
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        let card = self.cards.pop();
        self.expose_top();
        card
    }

    /// Detaches the run starting at `start`, exposing the new top.
    pub(crate) fn split_off(&mut self, start: usize) -> Vec<Card> {
        let run = self.cards.split_off(start.min(self.cards.len()));
        self.expose_top();
        run
    }

    /// Turns the top card face up once everything above it has left.
    /// Returns whether a card was flipped.
    pub(crate) fn expose_top(&mut self) -> bool {
        if !self.cards.is_empty() && self.face_down >= self.cards.len() {
            self.face_down = self.cards.len() - 1;
            return true;
        }
        if self.cards.is_empty() {
            self.face_down = 0;
        }
        false
    }
}

/// A foundation pile, built upward from the Ace in a single suit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Foundation {
    cards: Vec<Card>,
}

impl Foundation {
    pub const COMPLETE: usize = 13;

    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn suit(&self) -> Option<Suit> {
        self.cards.first().map(|card| card.suit)
    }

    pub fn is_complete(&self) -> bool {
        self.cards.len() == Self::COMPLETE
    }

    /// Rank value of the top card, `0` when empty.
    pub fn top_value(&self) -> u8 {
        self.top().map_or(0, |card| card.rank.value())
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}

/// Fixed-count single-card slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FreeCells {
    slots: Vec<Option<Card>>,
}

impl FreeCells {
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![None; count],
        }
    }

    pub fn from_slots(slots: Vec<Option<Card>>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[Option<Card>] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, cell: usize) -> Option<&Card> {
        self.slots.get(cell).and_then(Option::as_ref)
    }

    pub fn empty_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.slots.iter().flatten()
    }

    pub(crate) fn slot_mut(&mut self, cell: usize) -> Option<&mut Option<Card>> {
        self.slots.get_mut(cell)
    }
}

/// How many cards a stock draw turns over.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DrawMode {
    #[default]
    #[strum(to_string = "one", serialize = "1")]
    One,
    #[strum(to_string = "three", serialize = "3")]
    Three,
}

impl DrawMode {
    pub const fn count(self) -> usize {
        match self {
            DrawMode::One => 1,
            DrawMode::Three => 3,
        }
    }
}

/// Draw pile and its discard pile. Stock cards are face down; the top of
/// the waste is the only playable waste card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StockPile {
    pub(crate) stock: Vec<Card>,
    pub(crate) waste: Vec<Card>,
    pub draw_mode: DrawMode,
    /// Number of times the waste has been turned back into stock.
    pub passes: u32,
}

impl StockPile {
    pub fn new(stock: Vec<Card>, draw_mode: DrawMode) -> Self {
        Self {
            stock,
            waste: Vec::new(),
            draw_mode,
            passes: 0,
        }
    }

    pub fn with_waste(stock: Vec<Card>, waste: Vec<Card>, draw_mode: DrawMode) -> Self {
        Self {
            stock,
            waste,
            draw_mode,
            passes: 0,
        }
    }

    /// Stock cards; the last element is the next card drawn.
    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    /// Waste cards; the last element is playable.
    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.last()
    }
}

/// Variant-specific holding area next to the tableau.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Reserve {
    FreeCells(FreeCells),
    Stock(StockPile),
}

impl Reserve {
    pub fn free_cells(&self) -> Option<&FreeCells> {
        match self {
            Reserve::FreeCells(cells) => Some(cells),
            Reserve::Stock(_) => None,
        }
    }

    pub fn stock(&self) -> Option<&StockPile> {
        match self {
            Reserve::Stock(pile) => Some(pile),
            Reserve::FreeCells(_) => None,
        }
    }

    pub(crate) fn free_cells_mut(&mut self) -> Option<&mut FreeCells> {
        match self {
            Reserve::FreeCells(cells) => Some(cells),
            Reserve::Stock(_) => None,
        }
    }

    pub(crate) fn stock_mut(&mut self) -> Option<&mut StockPile> {
        match self {
            Reserve::Stock(pile) => Some(pile),
            Reserve::FreeCells(_) => None,
        }
    }

    pub fn cards(&self) -> Box<dyn Iterator<Item = &Card> + '_> {
        match self {
            Reserve::FreeCells(cells) => Box::new(cells.cards()),
            Reserve::Stock(pile) => Box::new(pile.stock.iter().chain(pile.waste.iter())),
        }
    }
}
