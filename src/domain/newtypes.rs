// SPDX-License-Identifier: MPL-2.0
//! Session newtypes.
//!
//! This module provides type-safe wrappers for the tunable values of the
//! session coordinator, ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_BURST_SPREAD_DEG, DEFAULT_PARTICLE_COUNT, DEFAULT_TICKER_INTERVAL_MS,
    DEFAULT_TRAIL_CAPACITY, DEFAULT_TRAIL_FADE_MS, DEFAULT_VOLUME, MAX_BURST_SPREAD_DEG,
    MAX_PARTICLE_COUNT, MAX_TICKER_INTERVAL_MS, MAX_TRAIL_CAPACITY, MAX_TRAIL_FADE_MS,
    MAX_VOLUME, MIN_TICKER_INTERVAL_MS, MIN_TRAIL_FADE_MS, MIN_VOLUME,
};
use std::time::Duration;

// =============================================================================
// Volume
// =============================================================================

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// Out-of-range input is clamped, matching slider semantics. NaN maps to
/// the minimum so a broken input can never make the engine louder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(MIN_VOLUME);
        }
        Self(volume.clamp(MIN_VOLUME, MAX_VOLUME))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if volume is effectively muted (below audible threshold).
    #[must_use]
    pub fn is_muted(self) -> bool {
        self.0 < 0.001
    }

    /// Returns the volume as a whole percentage for labels.
    #[must_use]
    pub fn percent(self) -> u8 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.0 * 100.0).round() as u8;
        percent
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

// =============================================================================
// TickerInterval
// =============================================================================

/// Delay between two fact rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickerInterval(u64);

impl TickerInterval {
    /// Creates a new interval in milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_TICKER_INTERVAL_MS, MAX_TICKER_INTERVAL_MS))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TickerInterval {
    fn default() -> Self {
        Self(DEFAULT_TICKER_INTERVAL_MS)
    }
}

// =============================================================================
// TrailCapacity
// =============================================================================

/// Maximum number of samples held by the pointer trail.
///
/// Zero is a valid capacity: the trail then never holds anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailCapacity(usize);

impl TrailCapacity {
    /// Creates a new capacity, clamping to the supported maximum.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self(capacity.min(MAX_TRAIL_CAPACITY))
    }

    /// Returns the capacity as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if the trail is disabled.
    #[must_use]
    pub fn is_disabled(self) -> bool {
        self.0 == 0
    }
}

impl Default for TrailCapacity {
    fn default() -> Self {
        Self(DEFAULT_TRAIL_CAPACITY)
    }
}

// =============================================================================
// FadeDuration
// =============================================================================

/// Visual lifetime of one trail sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeDuration(u64);

impl FadeDuration {
    /// Creates a new fade duration in milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_TRAIL_FADE_MS, MAX_TRAIL_FADE_MS))
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the fade as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for FadeDuration {
    fn default() -> Self {
        Self(DEFAULT_TRAIL_FADE_MS)
    }
}

// =============================================================================
// BurstShape
// =============================================================================

/// Particle count and spread of one confetti burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstShape {
    count: u32,
    spread_deg: f32,
}

impl BurstShape {
    /// Creates a new burst shape, clamping both fields to valid ranges.
    #[must_use]
    pub fn new(count: u32, spread_deg: f32) -> Self {
        let spread_deg = if spread_deg.is_nan() {
            DEFAULT_BURST_SPREAD_DEG
        } else {
            spread_deg.clamp(0.0, MAX_BURST_SPREAD_DEG)
        };
        Self {
            count: count.min(MAX_PARTICLE_COUNT),
            spread_deg,
        }
    }

    /// Number of particles in the burst.
    #[must_use]
    pub fn count(self) -> u32 {
        self.count
    }

    /// Cone angle in degrees.
    #[must_use]
    pub fn spread_deg(self) -> f32 {
        self.spread_deg
    }
}

impl Default for BurstShape {
    fn default() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
            spread_deg: DEFAULT_BURST_SPREAD_DEG,
        }
    }
}
