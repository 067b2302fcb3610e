// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Ticker**: Fact rotation interval
//! - **Trail**: Pointer trail capacity and visual fade
//! - **Volume**: Audio playback volume
//! - **Feedback**: Like burst and pulse parameters

// ==========================================================================
// Ticker Defaults
// ==========================================================================

/// Default delay between two fact rotations (in milliseconds).
pub const DEFAULT_TICKER_INTERVAL_MS: u64 = 5000;

/// Minimum rotation interval (in milliseconds).
pub const MIN_TICKER_INTERVAL_MS: u64 = 500;

/// Maximum rotation interval (in milliseconds).
pub const MAX_TICKER_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Trail Defaults
// ==========================================================================

/// Default number of pointer samples kept in the trail.
pub const DEFAULT_TRAIL_CAPACITY: usize = 20;

/// Maximum trail capacity. Zero is allowed and disables the trail.
pub const MAX_TRAIL_CAPACITY: usize = 256;

/// Default visual lifetime of one trail sample (in milliseconds).
pub const DEFAULT_TRAIL_FADE_MS: u64 = 1000;

/// Minimum visual lifetime of a trail sample (in milliseconds).
pub const MIN_TRAIL_FADE_MS: u64 = 50;

/// Maximum visual lifetime of a trail sample (in milliseconds).
pub const MAX_TRAIL_FADE_MS: u64 = 10_000;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

// ==========================================================================
// Feedback Defaults
// ==========================================================================

/// Default number of confetti particles per like.
pub const DEFAULT_PARTICLE_COUNT: u32 = 100;

/// Maximum number of confetti particles per like.
pub const MAX_PARTICLE_COUNT: u32 = 500;

/// Default burst spread (cone angle in degrees).
pub const DEFAULT_BURST_SPREAD_DEG: f32 = 70.0;

/// Maximum burst spread (full circle).
pub const MAX_BURST_SPREAD_DEG: f32 = 360.0;

/// Peak scale reached by the like button pulse.
pub const PULSE_PEAK_SCALE: f32 = 1.2;

/// Duration of the like button pulse (in milliseconds).
pub const PULSE_DURATION_MS: u64 = 300;
