//! Pure rule predicates shared by every variant.
//!
//! Nothing here mutates state or panics: predicates return booleans, and the
//! `check_*` forms return the violated relation so callers can report it.
mod movement;
mod predicates;

pub use movement::{SupermoveError, max_movable, supermove_capacity, validate_supermove};
pub use predicates::{
    FoundationOptions, RuleViolation, StackOptions, alternating_colors, can_stack_descending,
    can_stack_on_foundation, check_stack_descending, check_stack_on_foundation, is_black, is_red,
    is_valid_sequence, is_valid_tableau_sequence, same_suit,
};
