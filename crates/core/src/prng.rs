//! Random sources for placement draws.
//!
//! Every draw made by the transform and scheduler goes through a
//! [`RandomSource`] handle passed in by the caller. [`Xorshift64`] is the
//! production source; tests substitute scripted sources to pin draws.

use std::time::{SystemTime, UNIX_EPOCH};

/// A source of uniform random draws.
///
/// Only [`next_f64`](RandomSource::next_f64) is required; the other draws
/// are derived from it unless an implementation has a better integer path.
pub trait RandomSource {
    /// Returns a uniformly distributed f64 in [0, 1).
    fn next_f64(&mut self) -> f64;

    /// Returns a uniformly distributed f64 in [min, max).
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Returns a uniformly distributed integer in [0, max], both ends inclusive.
    fn next_inclusive(&mut self, max: u32) -> u32 {
        let span = f64::from(max) + 1.0;
        ((self.next_f64() * span) as u32).min(max)
    }
}

/// Xorshift64 PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift parameters (13, 7, 17). Seed of 0 is replaced
/// with a non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl RandomSource for Xorshift64 {
    /// Upper 53 bits of `next_u64()` divided by 2^53.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn next_inclusive(&mut self, max: u32) -> u32 {
        (self.next_u64() % (u64::from(max) + 1)) as u32
    }
}

/// Derives a seed from the wall clock for runs that did not ask for one.
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(Xorshift64::FALLBACK_SEED)
}
