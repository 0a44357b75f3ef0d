//! Deterministic inputs consumed by the engine.
//!
//! The only environmental fact a deal depends on is its seed; [`SeededRng`]
//! turns that seed into the random stream the shuffle consumes.
mod rng;

pub use rng::{RandomSource, SeededRng, create_rng};
