//! Common error infrastructure for solitaire-core.
//!
//! Domain-specific errors (e.g. `MoveRejection`) live next to the code that
//! produces them and implement [`GameError`] so callers can classify them
//! uniformly.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the player can issue a different move
/// - **Validation**: the request itself is malformed for this game
/// - **Internal**: an engine invariant broke; this is a bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Rule violation. State is unchanged and another move may succeed.
    ///
    /// Examples: rank mismatch, destination occupied
    Recoverable,

    /// The request names something that does not exist in this game.
    ///
    /// Examples: column index out of range, free-cell move in Klondike
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: a transition changed the number of cards in play
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all solitaire-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable, upper snake case, prefixed by domain
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for this error variant, for UI feedback and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
