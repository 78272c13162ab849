//! Static Starfield
//!
//! Background stars generated once at mount. Each twinkles on its own
//! period; nothing here is scheduled, brightness is a pure function of time.

use std::f32::consts::TAU;
use std::time::Duration;

use crate::random::RandomSource;

/// Number of background stars
pub const STAR_COUNT: usize = 50;

/// One background star
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    /// Percent of the height
    pub top: f32,
    /// Percent of the width
    pub left: f32,
    /// Apparent size, 1.0 to 3.0
    pub size: f32,
    /// Twinkle phase offset in seconds
    pub delay: f32,
    /// Twinkle period in seconds
    pub duration: f32,
    /// Peak opacity
    pub opacity: f32,
}

impl Star {
    fn generate(rng: &mut dyn RandomSource) -> Self {
        Self {
            top: rng.range_f64(0.0, 100.0) as f32,
            left: rng.range_f64(0.0, 100.0) as f32,
            size: rng.range_f64(1.0, 3.0) as f32,
            delay: rng.range_f64(0.0, 5.0) as f32,
            duration: rng.range_f64(4.0, 9.0) as f32,
            opacity: rng.range_f64(0.5, 1.0) as f32,
        }
    }

    /// Current brightness in `[0, opacity]`
    pub fn brightness(&self, now: Duration) -> f32 {
        let t = now.as_secs_f32() - self.delay;
        if t < 0.0 {
            return self.opacity;
        }
        let phase = (t / self.duration).fract();
        // cosine dip to 30% of peak halfway through the period
        let dip = 0.35 * (1.0 - (phase * TAU).cos());
        self.opacity * (1.0 - dip)
    }
}

/// The fixed set of background stars
#[derive(Clone, Debug)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    pub fn generate(rng: &mut dyn RandomSource) -> Self {
        Self::with_count(STAR_COUNT, rng)
    }

    pub fn with_count(count: usize, rng: &mut dyn RandomSource) -> Self {
        Self {
            stars: (0..count).map(|_| Star::generate(rng)).collect(),
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}
