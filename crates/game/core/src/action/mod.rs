//! Move descriptors and their transitions.
//!
//! [`Move`] is the sum type callers submit to the engine. Each variant wraps
//! a concrete kind that implements [`MoveTransition`], carrying only the
//! fields that kind needs.
//!
//! # Module Structure
//!
//! - `error`: [`MoveRejection`], the reason a move was refused
//! - `source`: [`CardSource`], single-card origins shared by several kinds
//! - `transition`: the three-phase [`MoveTransition`] hook trait
//! - `kinds`: one module per move kind

pub mod error;
pub mod kinds;
pub mod source;
pub mod transition;

pub use error::MoveRejection;
pub use kinds::{
    DrawMove, FoundationMove, FreeCellMove, RecycleMove, TableauMove, TableauPlacement,
};
pub use source::CardSource;
pub use transition::MoveTransition;

use core::fmt;

/// One player move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Move {
    /// Tableau run onto another column.
    Tableau(TableauMove),
    ToFreeCell(FreeCellMove),
    ToFoundation(FoundationMove),
    /// Single card from a cell, the waste or a foundation onto a column.
    ToTableau(TableauPlacement),
    Draw,
    Recycle,
}

impl Move {
    pub fn tableau(from: usize, start: usize, to: usize) -> Self {
        Move::Tableau(TableauMove::new(from, start, to))
    }

    pub fn to_free_cell(source: CardSource, cell: usize) -> Self {
        Move::ToFreeCell(FreeCellMove::new(source, cell))
    }

    pub fn to_foundation(source: CardSource, foundation: usize) -> Self {
        Move::ToFoundation(FoundationMove::new(source, foundation))
    }

    pub fn to_tableau(source: CardSource, to: usize) -> Self {
        Move::ToTableau(TableauPlacement::new(source, to))
    }

    /// The transition hooks for this move.
    pub fn transition(&self) -> &dyn MoveTransition {
        match self {
            Move::Tableau(mv) => mv,
            Move::ToFreeCell(mv) => mv,
            Move::ToFoundation(mv) => mv,
            Move::ToTableau(mv) => mv,
            Move::Draw => &DrawMove,
            Move::Recycle => &RecycleMove,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Tableau(_) => "tableau",
            Move::ToFreeCell(_) => "to_free_cell",
            Move::ToFoundation(_) => "to_foundation",
            Move::ToTableau(_) => "to_tableau",
            Move::Draw => "draw",
            Move::Recycle => "recycle",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Tableau(mv) => write!(f, "tableau {}[{}] -> tableau {}", mv.from, mv.start, mv.to),
            Move::ToFreeCell(mv) => write!(f, "{} -> cell {}", mv.source, mv.cell),
            Move::ToFoundation(mv) => write!(f, "{} -> foundation {}", mv.source, mv.foundation),
            Move::ToTableau(mv) => write!(f, "{} -> tableau {}", mv.source, mv.to),
            Move::Draw => f.write_str("draw"),
            Move::Recycle => f.write_str("recycle"),
        }
    }
}
