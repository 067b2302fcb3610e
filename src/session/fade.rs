// SPDX-License-Identifier: MPL-2.0
//! Visual expiry of trail samples.
//!
//! Every sample fades out linearly over a fixed duration counted from its
//! own recording time. Expired samples disappear from the rendered set but
//! stay in the [`PointerTrail`] until capacity evicts them.

use super::trail::{PointerTrail, Position, TrailSample};
use crate::domain::FadeDuration;
use std::time::{Duration, Instant};

/// A sample as the renderer should draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadingDot {
    pub position: Position,
    /// 1.0 when freshly recorded, approaching 0.0 at expiry.
    pub opacity: f32,
}

/// Per-sample fade policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailFade {
    duration: FadeDuration,
}

impl TrailFade {
    #[must_use]
    pub fn new(duration: FadeDuration) -> Self {
        Self { duration }
    }

    #[must_use]
    pub fn duration(&self) -> FadeDuration {
        self.duration
    }

    /// Returns the opacity of `sample` at `now`, or `None` once expired.
    #[must_use]
    pub fn opacity(&self, sample: &TrailSample, now: Instant) -> Option<f32> {
        let total = self.duration.as_duration();
        let age = now.saturating_duration_since(sample.recorded_at);
        if age >= total {
            return None;
        }
        let remaining = (total - age).as_secs_f32() / total.as_secs_f32();
        Some(remaining.clamp(0.0, 1.0))
    }

    /// Samples of `trail` still visible at `now`, oldest first.
    pub fn visible<'a>(
        &'a self,
        trail: &'a PointerTrail,
        now: Instant,
    ) -> impl Iterator<Item = FadingDot> + 'a {
        trail.samples().filter_map(move |sample| {
            self.opacity(sample, now).map(|opacity| FadingDot {
                position: sample.position,
                opacity,
            })
        })
    }

    /// Time until the newest visible sample expires.
    ///
    /// The presentation loop keeps requesting frames while this is `Some`.
    #[must_use]
    pub fn remaining(&self, trail: &PointerTrail, now: Instant) -> Option<Duration> {
        let latest = trail.latest()?;
        let expires_at = latest.recorded_at + self.duration.as_duration();
        let remaining = expires_at.saturating_duration_since(now);
        (!remaining.is_zero()).then_some(remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TrailCapacity;
    use crate::test_utils::assert_abs_diff_eq;

    fn fade() -> TrailFade {
        TrailFade::new(FadeDuration::from_millis(1000))
    }

    #[test]
    fn fresh_sample_is_fully_opaque() {
        let now = Instant::now();
        let sample = TrailSample {
            position: Position::new(1.0, 1.0),
            recorded_at: now,
        };
        assert_abs_diff_eq!(fade().opacity(&sample, now).unwrap_or(0.0), 1.0);
    }

    #[test]
    fn opacity_decreases_linearly() {
        let start = Instant::now();
        let sample = TrailSample {
            position: Position::default(),
            recorded_at: start,
        };
        let half = fade()
            .opacity(&sample, start + Duration::from_millis(500))
            .unwrap_or(0.0);
        assert_abs_diff_eq!(half, 0.5, epsilon = 1e-3);
    }

    #[test]
    fn sample_expires_after_duration() {
        let start = Instant::now();
        let sample = TrailSample {
            position: Position::default(),
            recorded_at: start,
        };
        assert!(fade()
            .opacity(&sample, start + Duration::from_millis(1000))
            .is_none());
    }

    #[test]
    fn expiry_does_not_shrink_the_logical_trail() {
        let start = Instant::now();
        let mut trail = PointerTrail::new(TrailCapacity::new(20));
        for i in 0..5 {
            trail.record(Position::new(i as f32, 0.0), start);
        }
        let later = start + Duration::from_secs(5);

        assert_eq!(fade().visible(&trail, later).count(), 0);
        assert_eq!(trail.len(), 5);
    }

    #[test]
    fn each_sample_expires_on_its_own_clock() {
        let start = Instant::now();
        let mut trail = PointerTrail::new(TrailCapacity::new(20));
        trail.record(Position::new(0.0, 0.0), start);
        trail.record(Position::new(1.0, 0.0), start + Duration::from_millis(600));

        let at = start + Duration::from_millis(1200);
        let dots: Vec<FadingDot> = fade().visible(&trail, at).collect();
        assert_eq!(dots.len(), 1);
        assert_eq!(dots[0].position, Position::new(1.0, 0.0));
    }

    #[test]
    fn remaining_tracks_the_newest_sample() {
        let start = Instant::now();
        let mut trail = PointerTrail::new(TrailCapacity::default());
        assert!(fade().remaining(&trail, start).is_none());

        trail.record(Position::default(), start);
        assert_eq!(
            fade().remaining(&trail, start + Duration::from_millis(400)),
            Some(Duration::from_millis(600))
        );
        assert!(fade()
            .remaining(&trail, start + Duration::from_secs(2))
            .is_none());
    }
}
