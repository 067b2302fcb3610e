// SPDX-License-Identifier: MPL-2.0
//! Scale animation played on the like button.
//!
//! The scale rises linearly from 1.0 to the peak at mid-point, then falls
//! back to 1.0. Restarting while running begins a fresh cycle.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default)]
pub struct PulseState {
    running: Option<Run>,
}

#[derive(Debug, Clone, Copy)]
struct Run {
    started_at: Instant,
    peak: f32,
    duration: Duration,
}

impl PulseState {
    /// Starts (or restarts) a pulse at `now`.
    pub fn start(&mut self, peak: f32, duration: Duration, now: Instant) {
        self.running = Some(Run {
            started_at: now,
            peak,
            duration,
        });
    }

    /// Current scale factor; 1.0 when idle.
    #[must_use]
    pub fn scale(&self, now: Instant) -> f32 {
        let Some(run) = self.running else {
            return 1.0;
        };
        if run.duration.is_zero() {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(run.started_at);
        let t = elapsed.as_secs_f32() / run.duration.as_secs_f32();
        if t >= 1.0 {
            return 1.0;
        }

        // Triangle wave: 0 -> 1 -> 0 over the run.
        let rise = 1.0 - (2.0 * t - 1.0).abs();
        1.0 + (run.peak - 1.0) * rise
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.running
            .is_some_and(|run| now.saturating_duration_since(run.started_at) < run.duration)
    }

    /// Drops a finished run so `is_animating` stays cheap.
    pub fn settle(&mut self, now: Instant) {
        if !self.is_animating(now) {
            self.running = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_relative_eq, F32_EPSILON};

    const DURATION: Duration = Duration::from_millis(300);

    #[test]
    fn idle_scale_is_one() {
        let pulse = PulseState::default();
        assert_relative_eq!(pulse.scale(Instant::now()), 1.0);
        assert!(!pulse.is_animating(Instant::now()));
    }

    #[test]
    fn peaks_at_midpoint() {
        let start = Instant::now();
        let mut pulse = PulseState::default();
        pulse.start(1.2, DURATION, start);

        assert_relative_eq!(pulse.scale(start), 1.0, epsilon = F32_EPSILON);
        assert_relative_eq!(
            pulse.scale(start + Duration::from_millis(150)),
            1.2,
            epsilon = 1e-4
        );
        assert_relative_eq!(
            pulse.scale(start + Duration::from_millis(75)),
            1.1,
            epsilon = 1e-4
        );
    }

    #[test]
    fn returns_to_rest_after_duration() {
        let start = Instant::now();
        let mut pulse = PulseState::default();
        pulse.start(1.2, DURATION, start);

        let end = start + DURATION;
        assert!(!pulse.is_animating(end));
        assert_relative_eq!(pulse.scale(end), 1.0);

        pulse.settle(end);
        assert!(!pulse.is_animating(start));
    }

    #[test]
    fn restart_begins_a_new_cycle() {
        let start = Instant::now();
        let mut pulse = PulseState::default();
        pulse.start(1.2, DURATION, start);

        let later = start + Duration::from_millis(250);
        pulse.start(1.2, DURATION, later);
        assert!(pulse.is_animating(later + Duration::from_millis(100)));
    }
}
