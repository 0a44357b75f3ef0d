//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod deal;
mod replay;
mod verify_seeds;

pub use deal::Deal;
pub use replay::Replay;
pub use verify_seeds::VerifySeeds;
