//! Bounded undo/redo history over immutable state snapshots.
//!
//! The manager owns an ordered list of snapshots and a cursor pointing at the
//! current one. It never inspects the snapshots: anything `Clone` works, and
//! anything `Serialize`/`Deserialize` can be persisted as JSON.
//!
//! - **Linear**: pushing after an undo discards the redo branch
//! - **Bounded**: the oldest snapshot is evicted once `max_size` is exceeded
//! - **Unvalidated**: undo/redo replay stored snapshots as-is
//!
//! # Architecture
//!
//! - [`HistoryManager`]: list + cursor, undo/redo/jump
//! - [`HistorySnapshot`]: flat `{states, current_index}` persistence form
//! - [`HistoryError`]: contract violations (empty history, bad index, bad payload)

pub mod error;
pub mod manager;
pub mod snapshot;

pub use error::HistoryError;
pub use manager::HistoryManager;
pub use snapshot::HistorySnapshot;
