//! Concrete oracles handed to the rules.
//!
//! The map is static apart from its visibility grid, which the session
//! recomputes around the player before and after every turn.
mod map;

use angler_core::PcgRng;

pub use map::GridMap;

/// Seeded generator for a session. `None` draws a fresh seed from the OS.
pub fn seeded_rng(seed: Option<u64>) -> (PcgRng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    (PcgRng::seeded(seed), seed)
}
