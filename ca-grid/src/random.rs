use std::fmt::Debug;

use rand::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Source of uniform values in [0, 1], handed to whatever needs randomness.
pub trait RandomSource: Debug {
    fn next_unit(&mut self) -> f64;
}

#[derive(Debug)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for Random {
    fn next_unit(&mut self) -> f64 {
        self.rng.random()
    }
}

/// Replays a fixed list of values, optionally looping, and counts draws.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct ScriptedRandom {
    values: Vec<f64>,
    repeat: bool,
    draws: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            repeat: false,
            draws: 0,
        }
    }

    pub fn cycle(values: Vec<f64>) -> Self {
        Self {
            values,
            repeat: true,
            draws: 0,
        }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let index = if self.repeat {
            self.draws % self.values.len()
        } else {
            self.draws
        };
        let value = *self
            .values
            .get(index)
            .unwrap_or_else(|| panic!("scripted random source ran out after {} draws", self.draws));
        self.draws += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_in_unit_range() {
        let mut rand = Random::new();
        for _ in 0..1000 {
            let value = rand.next_unit();
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Random::from_seed(7);
        let mut b = Random::from_seed(7);
        for _ in 0..20 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn scripted_source_cycles() {
        let mut rand = ScriptedRandom::cycle(vec![0.25, 0.75]);
        let drawn: Vec<f64> = (0..5).map(|_| rand.next_unit()).collect();
        assert_eq!(drawn, vec![0.25, 0.75, 0.25, 0.75, 0.25]);
        assert_eq!(rand.draws(), 5);
    }

    #[test]
    #[should_panic(expected = "ran out")]
    fn scripted_source_without_cycle_runs_out() {
        let mut rand = ScriptedRandom::new(vec![0.5]);
        rand.next_unit();
        rand.next_unit();
    }
}
