//! Pluggable Randomness
//!
//! Warning selection, spawn jitter, particle placement and the starfield all
//! draw from a [`RandomSource`] so tests can script the exact sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform samples in `[0, 1)`
pub trait RandomSource {
    /// Next uniform sample in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// Uniform sample in `[low, high)`
    fn range_f64(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_f64() * (high - low)
    }

    /// Uniform index in `0..len`. Returns 0 when `len` is 0.
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }

    /// Uniform 32-bit value
    fn next_u32(&mut self) -> u32 {
        (self.next_f64() * (u32::MAX as f64 + 1.0)) as u32
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Thread-local generator, the default for the live surface
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Reproducible generator for `--seed` runs
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of samples, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    samples: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Samples outside `[0, 1)` are clamped into range
    pub fn new(samples: impl Into<Vec<f64>>) -> Self {
        let mut samples: Vec<f64> = samples.into();
        if samples.is_empty() {
            samples.push(0.0);
        }
        for s in &mut samples {
            *s = s.clamp(0.0, 0.999_999_999);
        }
        Self { samples, cursor: 0 }
    }

    /// Always yields the same sample
    pub fn constant(sample: f64) -> Self {
        Self::new(vec![sample])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        let value = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        value
    }
}
