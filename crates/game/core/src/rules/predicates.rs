//! Colour, suit and rank relations plus the parameterised stacking rules.
//!
//! Empty-pile policy is carried by the option structs rather than hardcoded
//! per variant; FreeCell and Klondike differ only in the options they pass.

use crate::state::{Card, Rank};

/// Which relation a placement broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleViolation {
    #[error("empty target does not accept cards")]
    EmptyTargetForbidden,

    #[error("empty target only accepts {required:?}, got {actual:?}")]
    EmptyTargetRank { required: Rank, actual: Rank },

    #[error("rank {actual:?} cannot follow {target:?}")]
    RankMismatch { actual: Rank, target: Rank },

    #[error("colors must alternate")]
    ColorMismatch,

    #[error("suits must match")]
    SuitMismatch,
}

/// Options for descending tableau placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackOptions {
    pub require_alternating_colors: bool,
    pub allow_empty_target: bool,
    /// When set, an empty target accepts only this rank.
    pub empty_target_rank: Option<Rank>,
}

impl StackOptions {
    /// Any card may start an empty column.
    pub const FREECELL: Self = Self {
        require_alternating_colors: true,
        allow_empty_target: true,
        empty_target_rank: None,
    };

    /// Only a King may start an empty column.
    pub const KLONDIKE: Self = Self {
        require_alternating_colors: true,
        allow_empty_target: true,
        empty_target_rank: Some(Rank::King),
    };

    /// Pairwise rule inside an already-built run.
    pub const SEQUENCE: Self = Self {
        require_alternating_colors: true,
        allow_empty_target: false,
        empty_target_rank: None,
    };
}

impl Default for StackOptions {
    fn default() -> Self {
        Self::SEQUENCE
    }
}

/// Options for foundation placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoundationOptions {
    pub require_same_suit: bool,
}

impl Default for FoundationOptions {
    fn default() -> Self {
        Self {
            require_same_suit: true,
        }
    }
}

pub fn is_red(card: &Card) -> bool {
    matches!(card.color(), crate::state::CardColor::Red)
}

pub fn is_black(card: &Card) -> bool {
    !is_red(card)
}

pub fn alternating_colors(a: &Card, b: &Card) -> bool {
    is_red(a) != is_red(b)
}

pub fn same_suit(a: &Card, b: &Card) -> bool {
    a.suit == b.suit
}

/// Checks placing `card` on `target` (`None` = empty column).
pub fn check_stack_descending(
    card: &Card,
    target: Option<&Card>,
    options: StackOptions,
) -> Result<(), RuleViolation> {
    let Some(target) = target else {
        if !options.allow_empty_target {
            return Err(RuleViolation::EmptyTargetForbidden);
        }
        return match options.empty_target_rank {
            Some(required) if required != card.rank => Err(RuleViolation::EmptyTargetRank {
                required,
                actual: card.rank,
            }),
            _ => Ok(()),
        };
    };

    if card.rank.value() + 1 != target.rank.value() {
        return Err(RuleViolation::RankMismatch {
            actual: card.rank,
            target: target.rank,
        });
    }
    if options.require_alternating_colors && !alternating_colors(card, target) {
        return Err(RuleViolation::ColorMismatch);
    }
    Ok(())
}

pub fn can_stack_descending(card: &Card, target: Option<&Card>, options: StackOptions) -> bool {
    check_stack_descending(card, target, options).is_ok()
}

/// Checks placing `card` on a foundation holding `foundation`.
pub fn check_stack_on_foundation(
    card: &Card,
    foundation: &[Card],
    options: FoundationOptions,
) -> Result<(), RuleViolation> {
    let Some(top) = foundation.last() else {
        return match card.rank {
            Rank::Ace => Ok(()),
            actual => Err(RuleViolation::EmptyTargetRank {
                required: Rank::Ace,
                actual,
            }),
        };
    };

    if card.rank.value() != top.rank.value() + 1 {
        return Err(RuleViolation::RankMismatch {
            actual: card.rank,
            target: top.rank,
        });
    }
    if options.require_same_suit && !same_suit(card, top) {
        return Err(RuleViolation::SuitMismatch);
    }
    Ok(())
}

pub fn can_stack_on_foundation(card: &Card, foundation: &[Card], options: FoundationOptions) -> bool {
    check_stack_on_foundation(card, foundation, options).is_ok()
}

/// True when every adjacent pair, bottom toward top, satisfies
/// `pairwise(upper, lower)`. Runs of length 0 or 1 are trivially valid.
pub fn is_valid_sequence<F>(cards: &[Card], pairwise: F) -> bool
where
    F: Fn(&Card, &Card) -> bool,
{
    cards.windows(2).all(|pair| pairwise(&pair[1], &pair[0]))
}

/// Descending, alternating-colour run as built on the tableau.
pub fn is_valid_tableau_sequence(cards: &[Card]) -> bool {
    is_valid_sequence(cards, |card, target| {
        can_stack_descending(card, Some(target), StackOptions::SEQUENCE)
    })
}
