//! Single-caller game session: current game plus its undo history.
//!
//! Every accepted move is pushed as a new snapshot; undo and redo replay
//! stored snapshots without re-validating them.

use history::HistoryManager;
use rand::Rng;
use solitaire_core::{
    GameEngine, GameState, Move, MoveOutcome, engine, has_legal_moves, legal_moves,
};

use crate::config::SessionConfig;
use crate::error::{Result, SessionError};
use crate::snapshot::SessionSnapshot;

/// Drives one game at a time for a single caller.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,
    history: HistoryManager<GameState>,
}

impl GameSession {
    /// Upper bound for randomly drawn seeds.
    pub const MAX_RANDOM_SEED: i64 = 1_000_000;

    /// Creates a session and deals its first game.
    pub fn new(config: SessionConfig) -> Self {
        let mut session = Self {
            history: HistoryManager::new(config.history_limit),
            config,
        };
        session.new_game(None);
        session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn history(&self) -> &HistoryManager<GameState> {
        &self.history
    }

    /// Deals a fresh game, discarding the previous history.
    ///
    /// Seed precedence: `seed`, then the configured seed, then a random one.
    /// Returns the seed used.
    pub fn new_game(&mut self, seed: Option<i64>) -> i64 {
        let seed = seed
            .or(self.config.seed)
            .unwrap_or_else(|| rand::rng().random_range(1..=Self::MAX_RANDOM_SEED));
        let state = engine::init(&self.config.game, seed);

        tracing::info!(
            variant = %self.config.game.variant,
            seed,
            "new game dealt"
        );

        self.history.clear();
        self.history.push(state);
        seed
    }

    /// The game as it currently stands.
    pub fn state(&self) -> Result<&GameState> {
        Ok(self.history.current()?)
    }

    /// Applies `mv` and records the result.
    ///
    /// A rejected move leaves the session untouched.
    pub fn apply(&mut self, mv: &Move) -> Result<MoveOutcome> {
        let mut next = self.state()?.clone();
        let outcome = match GameEngine::new(&mut next).execute(mv) {
            Ok(outcome) => outcome,
            Err(rejection) => {
                tracing::debug!(%mv, %rejection, "move rejected");
                return Err(SessionError::Move(rejection));
            }
        };

        tracing::debug!(%mv, moves = next.moves, phase = %outcome.phase, "move applied");
        if outcome.is_won() {
            tracing::info!(seed = next.seed, moves = next.moves, "game won");
        }

        self.history.push(next);
        Ok(outcome)
    }

    pub fn undo(&mut self) -> Option<&GameState> {
        let state = self.history.undo()?;
        tracing::debug!(moves = state.moves, "undo");
        Some(state)
    }

    pub fn redo(&mut self) -> Option<&GameState> {
        let state = self.history.redo()?;
        tracing::debug!(moves = state.moves, "redo");
        Some(state)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Moves to the snapshot at `index` of the history.
    pub fn jump_to(&mut self, index: usize) -> Result<&GameState> {
        Ok(self.history.jump_to_index(index)?)
    }

    /// Plays safe foundation moves until none remain. Each one is its own
    /// history entry. Returns how many were played.
    pub fn autoplay(&mut self) -> Result<usize> {
        let mut played = 0;
        loop {
            let Some(mv) = engine::safe_foundation_move(self.state()?) else {
                break;
            };
            self.apply(&mv)?;
            played += 1;
        }
        if played > 0 {
            tracing::debug!(played, "autoplay");
        }
        Ok(played)
    }

    /// First legal move, if any.
    pub fn hint(&self) -> Result<Option<Move>> {
        Ok(legal_moves(self.state()?).into_iter().next())
    }

    pub fn legal_moves(&self) -> Result<Vec<Move>> {
        Ok(legal_moves(self.state()?))
    }

    /// True when the current game is neither won nor able to continue.
    pub fn is_stuck(&self) -> Result<bool> {
        let state = self.state()?;
        Ok(!state.is_won() && !has_legal_moves(state))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            config: self.config.clone(),
            history: self.history.serialize(),
        }
    }

    /// Rebuilds a session from a snapshot.
    ///
    /// `history_limit` overrides the limit stored in the snapshot. An empty
    /// history, or any state that does not hold exactly the 52 cards, cannot
    /// be restored.
    pub fn restore(snapshot: SessionSnapshot, history_limit: Option<usize>) -> Result<Self> {
        let config = snapshot.config;
        let limit = history_limit.unwrap_or(config.history_limit);
        let config = config.with_history_limit(limit);

        if let Some(index) = snapshot
            .history
            .states
            .iter()
            .position(|state| !state.is_complete_deck())
        {
            tracing::warn!(index, "restored state does not hold a complete deck");
            return Err(SessionError::CorruptState { index });
        }

        let stored = snapshot.history.states.len();
        if stored > config.history_limit {
            tracing::warn!(
                stored,
                limit = config.history_limit,
                "restored history exceeds limit, dropping oldest states"
            );
        }

        let history = HistoryManager::deserialize(snapshot.history, config.history_limit)?;
        let session = Self { config, history };
        session.state()?;
        Ok(session)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    pub fn from_json(json: &str, history_limit: Option<usize>) -> Result<Self> {
        let snapshot: SessionSnapshot = serde_json::from_str(json)?;
        Self::restore(snapshot, history_limit)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
