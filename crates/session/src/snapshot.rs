//! Persistable session payload.
use history::HistorySnapshot;
use serde::{Deserialize, Serialize};
use solitaire_core::GameState;

use crate::config::SessionConfig;

/// Everything needed to resume a session: its configuration and the full
/// undo history. Plain data, no handles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub config: SessionConfig,
    pub history: HistorySnapshot<GameState>,
}
