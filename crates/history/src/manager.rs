//! The undo/redo manager.

use std::collections::VecDeque;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{HistoryError, HistorySnapshot};

/// Ordered snapshots plus a cursor.
///
/// Invariant: `current` is `None` iff `states` is empty, and otherwise
/// addresses an element of `states`. `states.len() <= max_size` always.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryManager<S> {
    states: VecDeque<S>,
    current: Option<usize>,
    max_size: usize,
}

impl<S> HistoryManager<S> {
    pub const DEFAULT_MAX_SIZE: usize = 1000;

    /// Empty history keeping at most `max_size` snapshots (at least one).
    pub fn new(max_size: usize) -> Self {
        Self {
            states: VecDeque::new(),
            current: None,
            max_size: max_size.max(1),
        }
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Appends `state` as the new current snapshot.
    ///
    /// Everything after the cursor is discarded first. When the list grows
    /// past `max_size` the oldest snapshot is evicted and the cursor follows
    /// the pushed state.
    pub fn push(&mut self, state: S) {
        let keep = self.current.map_or(0, |index| index + 1);
        self.states.truncate(keep);
        self.states.push_back(state);
        if self.states.len() > self.max_size {
            self.states.pop_front();
        }
        self.current = Some(self.states.len() - 1);
    }

    /// Steps back one snapshot. `None` at the oldest snapshot or when empty.
    pub fn undo(&mut self) -> Option<&S> {
        let index = self.current.filter(|&index| index > 0)? - 1;
        self.current = Some(index);
        self.states.get(index)
    }

    /// Steps forward one snapshot. `None` at the newest snapshot or when empty.
    pub fn redo(&mut self) -> Option<&S> {
        let index = self.current.filter(|&index| index + 1 < self.states.len())? + 1;
        self.current = Some(index);
        self.states.get(index)
    }

    pub fn can_undo(&self) -> bool {
        self.current.is_some_and(|index| index > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.current.is_some_and(|index| index + 1 < self.states.len())
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> Result<&S, HistoryError> {
        self.current
            .and_then(|index| self.states.get(index))
            .ok_or(HistoryError::Empty)
    }

    /// Moves the cursor directly to `index` without discarding anything.
    pub fn jump_to_index(&mut self, index: usize) -> Result<&S, HistoryError> {
        let len = self.states.len();
        let state = self
            .states
            .get(index)
            .ok_or(HistoryError::IndexOutOfRange { index, len })?;
        self.current = Some(index);
        Ok(state)
    }

    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.states.iter()
    }

    pub fn clear(&mut self) {
        self.states.clear();
        self.current = None;
    }

    /// Rebuilds a manager from a snapshot under a fresh size limit.
    ///
    /// A payload longer than `max_size` keeps its newest states; a cursor that
    /// pointed into the evicted prefix lands on the oldest kept state.
    pub fn deserialize(snapshot: HistorySnapshot<S>, max_size: usize) -> Result<Self, HistoryError> {
        snapshot.validate()?;
        let mut manager = Self::new(max_size);
        let mut states = VecDeque::from(snapshot.states);
        let evicted = states.len().saturating_sub(manager.max_size);
        states.drain(..evicted);
        manager.current = snapshot
            .current_index
            .map(|index| index.saturating_sub(evicted));
        manager.states = states;
        Ok(manager)
    }
}

impl<S: Clone> HistoryManager<S> {
    /// Flat copy of the list and cursor.
    pub fn serialize(&self) -> HistorySnapshot<S> {
        HistorySnapshot {
            states: self.states.iter().cloned().collect(),
            current_index: self.current,
        }
    }
}

impl<S: Clone + Serialize> HistoryManager<S> {
    pub fn to_json(&self) -> Result<String, HistoryError> {
        Ok(serde_json::to_string(&self.serialize())?)
    }
}

impl<S: DeserializeOwned> HistoryManager<S> {
    pub fn from_json(json: &str, max_size: usize) -> Result<Self, HistoryError> {
        let snapshot: HistorySnapshot<S> = serde_json::from_str(json)?;
        Self::deserialize(snapshot, max_size)
    }
}

impl<S> Default for HistoryManager<S> {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_SIZE)
    }
}
