// SPDX-License-Identifier: MPL-2.0
//! Pointer trail: a sliding window of the most recent cursor positions.
//!
//! Retention here is purely count-based. Time-based fading of the rendered
//! dots is handled by [`super::fade::TrailFade`], which reads this window
//! but never shrinks it.

use crate::domain::TrailCapacity;
use std::collections::VecDeque;
use std::time::Instant;

/// A 2D position in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One recorded pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSample {
    pub position: Position,
    pub recorded_at: Instant,
}

/// Bounded, oldest-first-evicting sequence of pointer samples.
#[derive(Debug, Clone)]
pub struct PointerTrail {
    samples: VecDeque<TrailSample>,
    capacity: TrailCapacity,
}

impl PointerTrail {
    /// Creates an empty trail.
    #[must_use]
    pub fn new(capacity: TrailCapacity) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity.value()),
            capacity,
        }
    }

    /// Appends a sample and drops the oldest ones beyond capacity.
    ///
    /// Never rejects input. With a zero capacity the sample is dropped
    /// immediately.
    pub fn record(&mut self, position: Position, now: Instant) {
        self.samples.push_back(TrailSample {
            position,
            recorded_at: now,
        });
        while self.samples.len() > self.capacity.value() {
            self.samples.pop_front();
        }
    }

    /// Empties the trail.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Samples in arrival order (oldest first).
    pub fn samples(&self) -> impl Iterator<Item = &TrailSample> {
        self.samples.iter()
    }

    /// Positions in arrival order (oldest first).
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.samples.iter().map(|s| s.position)
    }

    /// Most recently recorded sample.
    #[must_use]
    pub fn latest(&self) -> Option<&TrailSample> {
        self.samples.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> TrailCapacity {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(clippy::cast_precision_loss)]
    fn p(i: usize) -> Position {
        Position::new(i as f32, (i * 2) as f32)
    }

    #[test]
    fn twenty_five_moves_keep_the_last_twenty() {
        let mut trail = PointerTrail::new(TrailCapacity::new(20));
        let now = Instant::now();
        for i in 1..=25 {
            trail.record(p(i), now);
        }

        let kept: Vec<Position> = trail.positions().collect();
        let expected: Vec<Position> = (6..=25).map(p).collect();
        assert_eq!(kept, expected);
    }

    #[test]
    fn length_never_exceeds_capacity() {
        let now = Instant::now();
        for capacity in [0, 1, 3, 20] {
            let mut trail = PointerTrail::new(TrailCapacity::new(capacity));
            for i in 0..50 {
                trail.record(p(i), now);
                assert!(trail.len() <= capacity);
            }
        }
    }

    #[test]
    fn short_sequences_are_kept_whole_in_order() {
        let mut trail = PointerTrail::new(TrailCapacity::new(20));
        let now = Instant::now();
        for i in 0..5 {
            trail.record(p(i), now);
        }
        let kept: Vec<Position> = trail.positions().collect();
        assert_eq!(kept, (0..5).map(p).collect::<Vec<_>>());
        assert_eq!(trail.latest().map(|s| s.position), Some(p(4)));
    }

    #[test]
    fn zero_capacity_holds_nothing() {
        let mut trail = PointerTrail::new(TrailCapacity::new(0));
        trail.record(p(1), Instant::now());
        assert!(trail.is_empty());
        assert!(trail.latest().is_none());
    }

    #[test]
    fn clear_empties_the_trail() {
        let mut trail = PointerTrail::new(TrailCapacity::default());
        trail.record(p(1), Instant::now());
        trail.clear();
        assert!(trail.is_empty());
    }
}
