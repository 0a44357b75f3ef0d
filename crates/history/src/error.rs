//! History contract violations.
//!
//! These signal a caller bug, not a player action: the session driver should
//! never ask an empty history for its current state.

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history is empty")]
    Empty,

    #[error("index {index} is out of range for {len} states")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("malformed history payload: {reason}")]
    MalformedPayload { reason: &'static str },

    #[error("history json: {0}")]
    Json(#[from] serde_json::Error),
}

impl HistoryError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Empty => "HISTORY_EMPTY",
            Self::IndexOutOfRange { .. } => "HISTORY_INDEX_OUT_OF_RANGE",
            Self::MalformedPayload { .. } => "HISTORY_MALFORMED_PAYLOAD",
            Self::Json(_) => "HISTORY_JSON",
        }
    }
}
