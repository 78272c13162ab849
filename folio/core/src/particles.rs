//! Shooting Stars
//!
//! Short-lived particles spawned on a jittered interval. The live set is
//! bounded (oldest dropped first) and every particle expires a fixed time
//! after it was spawned, whatever else happens to the set.

use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use crate::config::TimingConfig;
use crate::random::RandomSource;
use crate::timer::TimerQueue;

/// Horizontal spawn band in percent (kept out of the rightmost fifth)
pub const SPAWN_X_RANGE: (f64, f64) = (0.0, 80.0);
/// Vertical spawn band in percent
pub const SPAWN_Y_RANGE: (f64, f64) = (5.0, 85.0);

/// Spawn millisecond plus a random salt, unique within one spawner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParticleId {
    spawned_ms: u64,
    salt: u32,
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:08x}", self.spawned_ms, self.salt)
    }
}

/// One shooting star
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    pub spawned_at: Duration,
    /// Horizontal start, percent of the width
    pub x: f32,
    /// Vertical start, percent of the height
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StarTimer {
    Spawn,
    Expire(ParticleId),
}

/// Spawner and owner of the live particle set
#[derive(Debug)]
pub struct ShootingStars {
    particles: VecDeque<Particle>,
    max_live: usize,
    lifetime: Duration,
    spawn_min: Duration,
    spawn_max: Duration,
    timers: TimerQueue<StarTimer>,
}

impl ShootingStars {
    pub fn new(timing: &TimingConfig) -> Self {
        Self {
            particles: VecDeque::new(),
            max_live: timing.star_max_live.max(1),
            lifetime: timing.star_lifetime,
            spawn_min: timing.star_spawn_min,
            spawn_max: timing.star_spawn_max.max(timing.star_spawn_min),
            timers: TimerQueue::new(),
        }
    }

    /// Arm the first spawn
    pub fn start(&mut self, now: Duration, rng: &mut dyn RandomSource) {
        if !self.timers.any(|t| *t == StarTimer::Spawn) {
            self.schedule_spawn(now, rng);
        }
    }

    /// Stop spawning; live particles still expire on schedule
    pub fn stop(&mut self) {
        self.timers.cancel_where(|t| *t == StarTimer::Spawn);
    }

    fn schedule_spawn(&mut self, from: Duration, rng: &mut dyn RandomSource) {
        let low = self.spawn_min.as_secs_f64() * 1000.0;
        let high = self.spawn_max.as_secs_f64() * 1000.0;
        let gap = Duration::from_millis(rng.range_f64(low, high) as u64);
        self.timers.schedule(from, gap, StarTimer::Spawn);
    }

    /// Run every timer due at or before `now`
    pub fn advance(&mut self, now: Duration, rng: &mut dyn RandomSource) {
        while let Some((at, timer)) = self.timers.pop_due(now) {
            match timer {
                StarTimer::Spawn => {
                    self.spawn(at, rng);
                    self.schedule_spawn(at, rng);
                }
                StarTimer::Expire(id) => {
                    self.particles.retain(|p| p.id != id);
                }
            }
        }
    }

    fn spawn(&mut self, at: Duration, rng: &mut dyn RandomSource) {
        let mut id = ParticleId {
            spawned_ms: at.as_millis() as u64,
            salt: rng.next_u32(),
        };
        while self.particles.iter().any(|p| p.id == id) {
            id.salt = id.salt.wrapping_add(1);
        }

        let particle = Particle {
            id,
            spawned_at: at,
            x: rng.range_f64(SPAWN_X_RANGE.0, SPAWN_X_RANGE.1) as f32,
            y: rng.range_f64(SPAWN_Y_RANGE.0, SPAWN_Y_RANGE.1) as f32,
        };
        tracing::trace!(id = %id, x = particle.x, y = particle.y, "shooting star");

        self.particles.push_back(particle);
        self.timers
            .schedule(at, self.lifetime, StarTimer::Expire(id));

        while self.particles.len() > self.max_live {
            if let Some(dropped) = self.particles.pop_front() {
                self.timers
                    .cancel_where(|t| *t == StarTimer::Expire(dropped.id));
            }
        }
    }

    /// Live particles, oldest first
    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// How far through its flight a particle is, 0.0 to 1.0
    pub fn progress(&self, particle: &Particle, now: Duration) -> f32 {
        if self.lifetime.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(particle.spawned_at);
        (elapsed.as_secs_f32() / self.lifetime.as_secs_f32()).clamp(0.0, 1.0)
    }
}
