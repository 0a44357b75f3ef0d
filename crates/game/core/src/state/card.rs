//! Card identity: suits, ranks, colours and the compact [`CardId`].
//!
//! Cards are immutable values. A move relocates cards between zones; it never
//! edits one, so face-up/face-down bookkeeping lives on the zones instead.

use core::fmt;

/// Card suit. Declaration order is the deck order (suit-major).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn index(self) -> u8 {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }

    pub const fn color(self) -> CardColor {
        match self {
            Suit::Hearts | Suit::Diamonds => CardColor::Red,
            Suit::Spades | Suit::Clubs => CardColor::Black,
        }
    }

    /// Single-letter symbol used in card ids (`C`, `D`, `H`, `S`).
    pub const fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.letter() == letter.to_ascii_uppercase())
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardColor {
    Red,
    Black,
}

/// Card rank, Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric rank, 1 (Ace) through 13 (King).
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1..=13 => Some(Self::ALL[usize::from(value - 1)]),
            _ => None,
        }
    }

    /// Face symbol: `A`, `2`..`10`, `J`, `Q`, `K`.
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.symbol().eq_ignore_ascii_case(symbol))
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub const fn color(&self) -> CardColor {
        self.suit.color()
    }

    pub const fn id(&self) -> CardId {
        CardId(self.suit.index() * 13 + (self.rank.value() - 1))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.id().fmt(f)
    }
}

/// Deck-unique card identifier in `0..52`, suit-major.
///
/// Displays as rank symbol followed by suit letter: `AS`, `10H`, `KD`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardId(pub u8);

impl CardId {
    pub fn card(self) -> Option<Card> {
        if self.0 >= 52 {
            return None;
        }
        let suit = Suit::ALL[usize::from(self.0 / 13)];
        let rank = Rank::ALL[usize::from(self.0 % 13)];
        Some(Card::new(suit, rank))
    }

    /// Parses the display form (`"QH"`, `"10c"`).
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let letter = text.chars().last()?;
        let suit = Suit::from_letter(letter)?;
        let rank = Rank::from_symbol(&text[..text.len() - letter.len_utf8()])?;
        Some(Card::new(suit, rank).id())
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.card() {
            Some(card) => write!(f, "{}{}", card.rank.symbol(), card.suit.letter()),
            None => write!(f, "#{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_reversible() {
        let mut seen = std::collections::HashSet::new();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let card = Card::new(suit, rank);
                assert!(seen.insert(card.id()));
                assert_eq!(card.id().card(), Some(card));
            }
        }
        assert_eq!(seen.len(), 52);
        assert_eq!(CardId(52).card(), None);
    }

    #[test]
    fn display_and_parse() {
        let queen = Card::new(Suit::Hearts, Rank::Queen);
        assert_eq!(queen.to_string(), "QH");
        assert_eq!(CardId::parse("qh"), Some(queen.id()));

        let ten = Card::new(Suit::Clubs, Rank::Ten);
        assert_eq!(ten.to_string(), "10C");
        assert_eq!(CardId::parse("10C"), Some(ten.id()));

        assert_eq!(CardId::parse("1X"), None);
        assert_eq!(CardId::parse(""), None);
    }

    #[test]
    fn colors_follow_suits() {
        assert_eq!(Suit::Hearts.color(), CardColor::Red);
        assert_eq!(Suit::Diamonds.color(), CardColor::Red);
        assert_eq!(Suit::Clubs.color(), CardColor::Black);
        assert_eq!(Suit::Spades.color(), CardColor::Black);
    }

    #[test]
    fn rank_values() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::from_value(7), Some(Rank::Seven));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn suit_names_parse() {
        assert_eq!("spades".parse::<Suit>(), Ok(Suit::Spades));
        assert_eq!(Suit::Diamonds.as_ref(), "diamonds");
    }
}
