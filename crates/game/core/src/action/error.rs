//! Move rejection reasons.
//!
//! A rejection is local and non-fatal: the caller keeps its previous state
//! and surfaces the reason.

use crate::config::Variant;
use crate::error::{ErrorSeverity, GameError};
use crate::rules::{RuleViolation, SupermoveError};
use crate::state::Rank;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveRejection {
    #[error("game is already won")]
    GameWon,

    #[error("move is not available in {variant}")]
    UnsupportedMove { variant: Variant },

    #[error("column {column} does not exist")]
    NoSuchColumn { column: usize },

    #[error("free cell {cell} does not exist")]
    NoSuchFreeCell { cell: usize },

    #[error("foundation {foundation} does not exist")]
    NoSuchFoundation { foundation: usize },

    #[error("column {column} has no card at {index}")]
    NoSuchCard { column: usize, index: usize },

    #[error("source is empty")]
    SourceEmpty,

    #[error("card {index} of column {column} is face down")]
    CardFaceDown { column: usize, index: usize },

    #[error("source and destination are the same column")]
    SameColumn,

    #[error("destination is occupied")]
    DestinationOccupied,

    #[error("empty pile does not accept cards")]
    EmptyTargetForbidden,

    #[error("empty pile only accepts {required:?}, got {actual:?}")]
    EmptyTargetRank { required: Rank, actual: Rank },

    #[error("rank {actual:?} cannot go on {target:?}")]
    RankMismatch { actual: Rank, target: Rank },

    #[error("colors must alternate")]
    ColorMismatch,

    #[error("suits must match")]
    SuitMismatch,

    #[error("cards do not form a valid sequence")]
    SequenceInvalid,

    #[error("sequence of {len} cards is too large (can move {capacity})")]
    SequenceTooLarge { len: usize, capacity: usize },

    #[error("stock is empty")]
    StockEmpty,

    #[error("stock still has cards")]
    StockNotEmpty,

    #[error("waste is empty")]
    WasteEmpty,

    #[error("transition changed card count from {expected} to {actual}")]
    CardCountMismatch { expected: usize, actual: usize },
}

impl From<RuleViolation> for MoveRejection {
    fn from(violation: RuleViolation) -> Self {
        match violation {
            RuleViolation::EmptyTargetForbidden => Self::EmptyTargetForbidden,
            RuleViolation::EmptyTargetRank { required, actual } => {
                Self::EmptyTargetRank { required, actual }
            }
            RuleViolation::RankMismatch { actual, target } => Self::RankMismatch { actual, target },
            RuleViolation::ColorMismatch => Self::ColorMismatch,
            RuleViolation::SuitMismatch => Self::SuitMismatch,
        }
    }
}

impl From<SupermoveError> for MoveRejection {
    fn from(error: SupermoveError) -> Self {
        match error {
            SupermoveError::SequenceInvalid => Self::SequenceInvalid,
            SupermoveError::TooLarge { len, capacity } => Self::SequenceTooLarge { len, capacity },
        }
    }
}

impl GameError for MoveRejection {
    fn severity(&self) -> ErrorSeverity {
        use MoveRejection::*;
        match self {
            UnsupportedMove { .. }
            | NoSuchColumn { .. }
            | NoSuchFreeCell { .. }
            | NoSuchFoundation { .. }
            | NoSuchCard { .. }
            | SameColumn => ErrorSeverity::Validation,
            CardCountMismatch { .. } => ErrorSeverity::Internal,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use MoveRejection::*;
        match self {
            GameWon => "MOVE_GAME_WON",
            UnsupportedMove { .. } => "MOVE_UNSUPPORTED",
            NoSuchColumn { .. } => "MOVE_NO_SUCH_COLUMN",
            NoSuchFreeCell { .. } => "MOVE_NO_SUCH_FREE_CELL",
            NoSuchFoundation { .. } => "MOVE_NO_SUCH_FOUNDATION",
            NoSuchCard { .. } => "MOVE_NO_SUCH_CARD",
            SourceEmpty => "MOVE_SOURCE_EMPTY",
            CardFaceDown { .. } => "MOVE_CARD_FACE_DOWN",
            SameColumn => "MOVE_SAME_COLUMN",
            DestinationOccupied => "MOVE_DESTINATION_OCCUPIED",
            EmptyTargetForbidden => "MOVE_EMPTY_TARGET_FORBIDDEN",
            EmptyTargetRank { .. } => "MOVE_EMPTY_TARGET_RANK",
            RankMismatch { .. } => "MOVE_RANK_MISMATCH",
            ColorMismatch => "MOVE_COLOR_MISMATCH",
            SuitMismatch => "MOVE_SUIT_MISMATCH",
            SequenceInvalid => "MOVE_SEQUENCE_INVALID",
            SequenceTooLarge { .. } => "MOVE_SEQUENCE_TOO_LARGE",
            StockEmpty => "MOVE_STOCK_EMPTY",
            StockNotEmpty => "MOVE_STOCK_NOT_EMPTY",
            WasteEmpty => "MOVE_WASTE_EMPTY",
            CardCountMismatch { .. } => "MOVE_CARD_COUNT_MISMATCH",
        }
    }
}
