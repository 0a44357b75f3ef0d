//! Persistence form of a history.

use serde::{Deserialize, Serialize};

use crate::HistoryError;

/// Flat `{states, current_index}` payload.
///
/// The size limit is deliberately absent: it is runtime configuration and is
/// supplied again when the payload is turned back into a manager.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot<S> {
    pub states: Vec<S>,
    pub current_index: Option<usize>,
}

impl<S> HistorySnapshot<S> {
    /// Checks that the cursor agrees with the state list.
    pub fn validate(&self) -> Result<(), HistoryError> {
        match (self.states.is_empty(), self.current_index) {
            (true, None) => Ok(()),
            (true, Some(_)) => Err(HistoryError::MalformedPayload {
                reason: "cursor set on an empty state list",
            }),
            (false, None) => Err(HistoryError::MalformedPayload {
                reason: "states present without a cursor",
            }),
            (false, Some(index)) if index >= self.states.len() => {
                Err(HistoryError::MalformedPayload {
                    reason: "cursor past the last state",
                })
            }
            (false, Some(_)) => Ok(()),
        }
    }
}

impl<S> Default for HistorySnapshot<S> {
    fn default() -> Self {
        Self {
            states: Vec::new(),
            current_index: None,
        }
    }
}
