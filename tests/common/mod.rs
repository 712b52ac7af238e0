//! Deterministic random source shared by the integration tests.

#![allow(dead_code)] // not every test binary uses every constructor

use rover_rust::simulation::rng::RandomSource;

/// Plays back a fixed script of chance values and a fixed pick.
///
/// Once the chance script runs out, the last value repeats.
pub struct ScriptedRandom {
    chances: Vec<f64>,
    cursor: usize,
    pick: usize,
}

impl ScriptedRandom {
    pub fn new(chances: Vec<f64>, pick: usize) -> Self {
        assert!(!chances.is_empty(), "chance script must not be empty");
        Self {
            chances,
            cursor: 0,
            pick,
        }
    }

    /// Never triggers the obstacle branch.
    pub fn clear_path() -> Self {
        Self::new(vec![0.99], 0)
    }

    /// Always triggers the obstacle branch.
    pub fn blocked_path() -> Self {
        Self::new(vec![0.0], 0)
    }

    /// Clear path with a fixed scan pick.
    pub fn with_pick(pick: usize) -> Self {
        Self::new(vec![0.99], pick)
    }
}

impl RandomSource for ScriptedRandom {
    fn chance(&mut self) -> f64 {
        let value = self.chances[self.cursor];
        if self.cursor + 1 < self.chances.len() {
            self.cursor += 1;
        }
        value
    }

    fn pick(&mut self, n: usize) -> usize {
        self.pick.min(n.saturating_sub(1))
    }
}
