//! Errors surfaced by a game session.
use history::HistoryError;
use solitaire_core::{ErrorSeverity, GameError, MoveRejection};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The move broke a rule; the session is unchanged.
    #[error("move rejected: {0}")]
    Move(#[from] MoveRejection),

    #[error(transparent)]
    History(#[from] HistoryError),

    /// A restored state does not hold exactly one full deck.
    #[error("restored state {index} does not hold a complete deck")]
    CorruptState { index: usize },

    #[error("session json: {0}")]
    Json(#[from] serde_json::Error),
}

impl SessionError {
    /// The rejection, when the error is an ordinary rule violation.
    pub fn rejection(&self) -> Option<&MoveRejection> {
        match self {
            SessionError::Move(rejection) => Some(rejection),
            _ => None,
        }
    }
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SessionError::Move(rejection) => rejection.severity(),
            SessionError::History(_)
            | SessionError::CorruptState { .. }
            | SessionError::Json(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SessionError::Move(rejection) => rejection.error_code(),
            SessionError::History(error) => error.code(),
            SessionError::CorruptState { .. } => "SESSION_CORRUPT_STATE",
            SessionError::Json(_) => "SESSION_JSON",
        }
    }
}
