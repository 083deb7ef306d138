//! Test doubles shared by the unit tests of this crate.

use crate::prng::RandomSource;

/// Replays fixed draws, cycling when a script runs out.
///
/// `unit` feeds `next_f64` (and so `next_range`); `ints` feeds
/// `next_inclusive`, clamped to the requested maximum. An empty script
/// always yields 0.
pub struct ScriptedRandom {
    unit: Vec<f64>,
    ints: Vec<u32>,
    unit_pos: usize,
    int_pos: usize,
}

impl ScriptedRandom {
    pub fn new(unit: &[f64], ints: &[u32]) -> Self {
        Self {
            unit: unit.to_vec(),
            ints: ints.to_vec(),
            unit_pos: 0,
            int_pos: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.unit.is_empty() {
            return 0.0;
        }
        let v = self.unit[self.unit_pos % self.unit.len()];
        self.unit_pos += 1;
        v
    }

    fn next_inclusive(&mut self, max: u32) -> u32 {
        if self.ints.is_empty() {
            return 0;
        }
        let v = self.ints[self.int_pos % self.ints.len()];
        self.int_pos += 1;
        v.min(max)
    }
}
