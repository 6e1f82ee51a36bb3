//! Jitter sources for the synthesized humidity signal
//!
//! Humidity has no sensor backing in the current record shape; the
//! aggregator emits a baseline plus a small perturbation so the chart
//! interface stays stable until real humidity arrives. The perturbation is
//! the only nondeterministic value in the whole pipeline, so it lives
//! behind a trait: production uses [`RandomJitter`], tests and
//! reproducible exports use [`FixedJitter`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::constants::HUMIDITY_JITTER_PCT;

/// Source of humidity perturbation samples.
pub trait JitterSource {
    /// Next perturbation in %RH, within `[-amplitude, +amplitude]`.
    fn sample(&mut self) -> f64;
}

/// PRNG-backed jitter for production charts.
#[derive(Debug, Clone)]
pub struct RandomJitter {
    rng: SmallRng,
    amplitude: f64,
}

impl RandomJitter {
    /// Create a jitter source with the default ±2 %RH amplitude.
    pub fn new() -> Self {
        Self::with_amplitude(HUMIDITY_JITTER_PCT)
    }

    /// Create a jitter source with a custom amplitude in %RH.
    pub fn with_amplitude(amplitude: f64) -> Self {
        Self {
            rng: SmallRng::from_entropy(),
            amplitude: amplitude.abs(),
        }
    }

    /// Create a seeded source for reproducible sequences.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            amplitude: HUMIDITY_JITTER_PCT,
        }
    }
}

impl Default for RandomJitter {
    fn default() -> Self {
        Self::new()
    }
}

impl JitterSource for RandomJitter {
    fn sample(&mut self) -> f64 {
        if self.amplitude == 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-self.amplitude..=self.amplitude)
    }
}

/// Constant jitter for testing and reproducible output.
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter {
    offset: f64,
}

impl FixedJitter {
    /// Create a source that always returns `offset`.
    pub fn new(offset: f64) -> Self {
        Self { offset }
    }

    /// Change the constant offset.
    pub fn set(&mut self, offset: f64) {
        self.offset = offset;
    }
}

impl JitterSource for FixedJitter {
    fn sample(&mut self) -> f64 {
        self.offset
    }
}
