//! The 52-card deck and its seeded shuffle.

use crate::env::{RandomSource, SeededRng};
use crate::state::{Card, Rank, Suit};

/// Returns the 52 cards in deck order: suit-major, rank-minor (A..K per suit).
pub fn create_deck() -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
        .collect()
}

/// Returns a seed-determined permutation of `deck`. The argument is left
/// untouched.
pub fn shuffle(deck: &[Card], seed: i64) -> Vec<Card> {
    let mut rng = SeededRng::new(seed);
    shuffle_with(deck, &mut rng)
}

/// Fisher–Yates over a copy of `deck`, drawing one value from `rng` per
/// remaining position, from the back of the deck toward the front.
pub fn shuffle_with<R: RandomSource + ?Sized>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    let mut cards = deck.to_vec();
    for i in (1..cards.len()).rev() {
        let j = rng.below(i + 1);
        cards.swap(i, j);
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deck_is_ordered_and_complete() {
        let deck = create_deck();
        assert_eq!(deck.len(), 52);
        assert_eq!(deck[0], Card::new(Suit::Clubs, Rank::Ace));
        assert_eq!(deck[12], Card::new(Suit::Clubs, Rank::King));
        assert_eq!(deck[13], Card::new(Suit::Diamonds, Rank::Ace));
        assert_eq!(deck[51], Card::new(Suit::Spades, Rank::King));

        let ids: HashSet<_> = deck.iter().map(Card::id).collect();
        assert_eq!(ids.len(), 52);
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let deck = create_deck();
        assert_eq!(shuffle(&deck, 1234), shuffle(&deck, 1234));
        assert_eq!(shuffle(&deck, -5), shuffle(&deck, -5));
    }

    #[test]
    fn different_seeds_give_different_permutations() {
        let deck = create_deck();
        let deals: HashSet<Vec<Card>> = (0..50).map(|seed| shuffle(&deck, seed)).collect();
        assert_eq!(deals.len(), 50);
    }

    #[test]
    fn shuffle_keeps_the_same_cards_and_leaves_input_alone() {
        let deck = create_deck();
        let before = deck.clone();
        let shuffled = shuffle(&deck, 7);

        assert_eq!(deck, before);
        assert_ne!(shuffled, deck);

        let mut sorted = shuffled.clone();
        sorted.sort_by_key(Card::id);
        assert_eq!(sorted, deck);
    }

    #[test]
    fn shuffle_handles_tiny_inputs() {
        assert!(shuffle(&[], 3).is_empty());
        let single = [Card::new(Suit::Hearts, Rank::Five)];
        assert_eq!(shuffle(&single, 3), single.to_vec());
    }
}
