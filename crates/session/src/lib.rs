//! Game session driver.
//!
//! Owns the current game and its undo history for a single caller, loads
//! configuration from the environment, and produces JSON snapshots for
//! whatever persistence layer sits above it.
pub mod config;
pub mod error;
pub mod session;
pub mod snapshot;

pub use config::SessionConfig;
pub use error::{Result, SessionError};
pub use session::GameSession;
pub use snapshot::SessionSnapshot;
