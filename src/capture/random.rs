use rand::Rng;

use crate::constants::SHINY_ODDS;

/// Source of shake rolls, uniform in `[0, 100)`
pub trait ShakeRoll {
    fn roll(&mut self) -> f64;
}

/// Rolls backed by any `rand` generator
pub struct RngRoll<R: Rng>(pub R);

impl<R: Rng> ShakeRoll for RngRoll<R> {
    fn roll(&mut self) -> f64 {
        self.0.gen_range(0.0..100.0)
    }
}

/// Replays a fixed sequence of rolls, cycling when it runs out
///
/// Counts how many rolls were taken.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct FixedRoll {
    values: Vec<f64>,
    taken: usize,
}

#[cfg(test)]
impl FixedRoll {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "FixedRoll needs at least one value");
        Self { values, taken: 0 }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of rolls drawn so far
    pub fn taken(&self) -> usize {
        self.taken
    }
}

#[cfg(test)]
impl ShakeRoll for FixedRoll {
    fn roll(&mut self) -> f64 {
        let value = self.values[self.taken % self.values.len()];
        self.taken += 1;
        value.clamp(0.0, 99.999_999)
    }
}

/// Decides once per encounter whether the wild Pokemon is shiny
pub fn roll_shiny<R: Rng>(rng: &mut R) -> bool {
    rng.gen_ratio(1, SHINY_ODDS)
}
