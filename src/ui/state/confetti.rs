// SPDX-License-Identifier: MPL-2.0
//! Confetti particle simulation.
//!
//! Particles are launched upward in a cone of `spread` degrees, fall under
//! gravity and disappear once their lifetime ends. Positions are in window
//! coordinates, y pointing down.

use crate::domain::BurstShape;
use crate::session::Position;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Downward acceleration, px/s².
const GRAVITY: f32 = 900.0;
const MIN_SPEED: f32 = 250.0;
const MAX_SPEED: f32 = 650.0;
const LIFETIME: Duration = Duration::from_millis(1_600);
/// Hard cap so repeated likes cannot grow the field without bound.
const MAX_PARTICLES: usize = 2_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub origin: Position,
    /// Initial velocity, px/s.
    pub velocity: (f32, f32),
    pub spawned_at: Instant,
    /// Index into the confetti palette.
    pub color: usize,
}

impl Particle {
    /// Position after `elapsed` of ballistic flight.
    #[must_use]
    pub fn position_after(&self, elapsed: Duration) -> Position {
        let t = elapsed.as_secs_f32();
        Position::new(
            self.origin.x + self.velocity.0 * t,
            self.origin.y + self.velocity.1 * t + 0.5 * GRAVITY * t * t,
        )
    }

    /// Remaining opacity in [0, 1], `None` once expired.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> Option<f32> {
        let age = now.saturating_duration_since(self.spawned_at);
        if age >= LIFETIME {
            return None;
        }
        Some(1.0 - age.as_secs_f32() / LIFETIME.as_secs_f32())
    }
}

/// Live confetti particles.
#[derive(Debug, Clone)]
pub struct ConfettiField {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl Default for ConfettiField {
    fn default() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl ConfettiField {
    #[must_use]
    pub fn new(rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            rng,
        }
    }

    /// Launches `shape.count()` particles from `origin`.
    pub fn burst(&mut self, shape: BurstShape, origin: Position, palette_len: usize, now: Instant) {
        let half_spread = shape.spread_deg().to_radians() / 2.0;
        let up = -std::f32::consts::FRAC_PI_2;
        let palette_len = palette_len.max(1);

        for i in 0..shape.count() as usize {
            let angle = if half_spread > 0.0 {
                up + self.rng.gen_range(-half_spread..=half_spread)
            } else {
                up
            };
            let speed = self.rng.gen_range(MIN_SPEED..=MAX_SPEED);
            self.particles.push(Particle {
                origin,
                velocity: (angle.cos() * speed, angle.sin() * speed),
                spawned_at: now,
                color: i % palette_len,
            });
        }

        if self.particles.len() > MAX_PARTICLES {
            let excess = self.particles.len() - MAX_PARTICLES;
            self.particles.drain(..excess);
        }
    }

    /// Removes expired particles.
    pub fn prune(&mut self, now: Instant) {
        self.particles.retain(|p| p.opacity(now).is_some());
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
