//! RNG oracle for reproducible random draws.
//!
//! Every stochastic rule takes its randomness from an injected [`RngOracle`],
//! so a seeded generator replays a game exactly and tests can script rolls.

use std::collections::VecDeque;

/// Source of uniform random draws.
pub trait RngOracle {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform integer in `[min, max]` inclusive. Returns `min` if `max <= min`.
    fn range(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = (max as i64 - min as i64 + 1) as u64;
        (min as i64 + (self.next_u32() as u64 % span) as i64) as i32
    }

    /// Percentile roll in `[0, 100]` inclusive, as the capture rules use.
    fn percent(&mut self) -> i32 {
        self.range(0, 100)
    }

    /// Uniform index in `0..len`. Returns 0 for empty collections.
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.range(0, (len - 1) as i32) as usize
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces the same sequence
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn seeded(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.state = Self::pcg_step(rng.state.wrapping_add(seed));
        rng
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        // XOR upper bits with lower bits, shift right
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;

        // Use upper bits to determine rotation amount
        let rot = (state >> 59) as u32;

        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

/// Replays a fixed script of roll results.
///
/// Every draw pops the next scripted value, even a degenerate `range(n, n)`,
/// and clamps it into the requested bounds, so a test reads as the sequence
/// of rolls the rules make. Once the script runs out every draw returns the
/// lower bound.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    rolls: VecDeque<i32>,
}

impl ScriptedRng {
    pub fn new(rolls: impl IntoIterator<Item = i32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Appends more rolls to the script.
    pub fn push(&mut self, roll: i32) {
        self.rolls.push_back(roll);
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.rolls.pop_front().map_or(0, |roll| roll.max(0) as u32)
    }

    fn range(&mut self, min: i32, max: i32) -> i32 {
        match self.rolls.pop_front() {
            Some(roll) if max > min => roll.clamp(min, max),
            _ => min,
        }
    }
}
