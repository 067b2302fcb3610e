// SPDX-License-Identifier: MPL-2.0
//! Interactive session state coordinator.
//!
//! The coordinator owns five independent slices (likes, fact rotation,
//! pointer trail, playback, theme) and is the only place that mutates them.
//! The presentation root forwards timer ticks and user events here and
//! reads the slices back when rendering.
//!
//! # Lifecycle
//!
//! A session is inert until [`Coordinator::start`]. While active, the
//! application produces the rotation timer and the pointer listener; once
//! [`Coordinator::stop`] runs (explicitly, or on drop) both subscriptions
//! disappear, the trail is emptied and audio is paused.
//!
//! # Slices
//!
//! - [`rotator`]: fact ticker index
//! - [`trail`] / [`fade`]: pointer window and its visual expiry
//! - [`playback`]: play/pause and volume
//! - [`feedback`]: like counter and celebration effects
//! - [`theme`]: light/dark flag

pub mod fade;
pub mod feedback;
pub mod playback;
pub mod rotator;
pub mod theme;
pub mod trail;

pub use fade::{FadingDot, TrailFade};
pub use feedback::{Effect, EffectSink, FeedbackDispatcher, NotifyIcon, TriggerOutcome};
pub use playback::PlaybackController;
pub use rotator::FactRotator;
pub use theme::ThemeFlag;
pub use trail::{PointerTrail, Position, TrailSample};

use crate::audio::AudioEngine;
use crate::catalog;
use crate::config::defaults::{PULSE_DURATION_MS, PULSE_PEAK_SCALE};
use crate::domain::{BurstShape, FadeDuration, TickerInterval, TrailCapacity, Volume};
use crate::error::AudioError;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

/// Tunables for one session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    pub fact_count: NonZeroUsize,
    pub ticker_interval: TickerInterval,
    pub trail_capacity: TrailCapacity,
    pub trail_fade: FadeDuration,
    pub volume: Volume,
    pub burst: BurstShape,
    pub theme: ThemeFlag,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            fact_count: catalog::fact_count(),
            ticker_interval: TickerInterval::default(),
            trail_capacity: TrailCapacity::default(),
            trail_fade: FadeDuration::default(),
            volume: Volume::default(),
            burst: BurstShape::default(),
            theme: ThemeFlag::default(),
        }
    }
}

/// Owner of every mutable session slice.
pub struct Coordinator<E: AudioEngine> {
    rotator: FactRotator,
    trail: PointerTrail,
    fade: TrailFade,
    playback: PlaybackController<E>,
    feedback: FeedbackDispatcher,
    theme: ThemeFlag,
    active: bool,
}

impl<E: AudioEngine> Coordinator<E> {
    /// Builds an inactive session around `engine`.
    pub fn new(settings: SessionSettings, engine: E) -> Self {
        Self {
            rotator: FactRotator::new(settings.fact_count, settings.ticker_interval),
            trail: PointerTrail::new(settings.trail_capacity),
            fade: TrailFade::new(settings.trail_fade),
            playback: PlaybackController::new(engine, settings.volume),
            feedback: FeedbackDispatcher::new(
                settings.burst,
                PULSE_PEAK_SCALE,
                Duration::from_millis(PULSE_DURATION_MS),
            ),
            theme: settings.theme,
            active: false,
        }
    }

    /// Activates the session: arms the rotation timer and the pointer
    /// listener.
    pub fn start(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        self.rotator.start();
        tracing::info!("session started");
    }

    /// Tears the session down: cancels the timer, drops the listener,
    /// empties the trail and pauses audio. Safe to call more than once.
    pub fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.rotator.stop();
        self.trail.clear();
        self.playback.shutdown();
        tracing::info!(likes = self.feedback.likes(), "session stopped");
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    // ---------------------------------------------------------------------
    // Event forwarding
    // ---------------------------------------------------------------------

    /// Rotation timer tick. Returns `true` if the visible fact changed.
    pub fn on_rotation_tick(&mut self) -> bool {
        self.active && self.rotator.tick()
    }

    /// Pointer-move event. Ignored outside an active session.
    pub fn on_pointer_moved(&mut self, position: Position, now: Instant) {
        if self.active {
            self.trail.record(position, now);
        }
    }

    /// Like button press.
    pub fn like(&mut self, origin: Position, sink: &mut dyn EffectSink) -> TriggerOutcome {
        self.feedback.trigger(origin, sink)
    }

    /// Play/pause button press.
    ///
    /// # Errors
    ///
    /// Returns the audio engine's error; the session keeps running.
    pub fn toggle_playback(&mut self) -> Result<bool, AudioError> {
        self.playback.toggle()
    }

    /// Volume slider change.
    ///
    /// # Errors
    ///
    /// Returns the audio engine's error; the clamped value is kept anyway.
    pub fn set_volume(&mut self, value: f32) -> Result<Volume, AudioError> {
        self.playback.set_volume(value)
    }

    /// Theme button press. Returns the new mode.
    pub fn toggle_theme(&mut self) -> ThemeFlag {
        self.theme.toggle();
        tracing::debug!(theme = ?self.theme, "theme toggled");
        self.theme
    }

    // ---------------------------------------------------------------------
    // Read side
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn likes(&self) -> u64 {
        self.feedback.likes()
    }

    #[must_use]
    pub fn fact_index(&self) -> usize {
        self.rotator.index()
    }

    #[must_use]
    pub fn rotator(&self) -> &FactRotator {
        &self.rotator
    }

    #[must_use]
    pub fn trail(&self) -> &PointerTrail {
        &self.trail
    }

    /// Trail samples that are still fading out at `now`.
    pub fn visible_trail(&self, now: Instant) -> Vec<FadingDot> {
        self.fade.visible(&self.trail, now).collect()
    }

    /// Whether some trail dot is still fading at `now`.
    #[must_use]
    pub fn trail_is_fading(&self, now: Instant) -> bool {
        self.fade.remaining(&self.trail, now).is_some()
    }

    #[must_use]
    pub fn playback(&self) -> &PlaybackController<E> {
        &self.playback
    }

    #[must_use]
    pub fn theme(&self) -> ThemeFlag {
        self.theme
    }
}

impl<E: AudioEngine> Drop for Coordinator<E> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<E: AudioEngine> std::fmt::Debug for Coordinator<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("active", &self.active)
            .field("likes", &self.feedback.likes())
            .field("fact_index", &self.rotator.index())
            .field("trail_len", &self.trail.len())
            .field("is_playing", &self.playback.is_playing())
            .field("theme", &self.theme)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EffectError;

    #[derive(Debug, Default)]
    struct SilentEngine;

    impl AudioEngine for SilentEngine {
        fn play(&mut self) -> Result<(), AudioError> {
            Ok(())
        }
        fn pause(&mut self) -> Result<(), AudioError> {
            Ok(())
        }
        fn set_volume(&mut self, _volume: Volume) -> Result<(), AudioError> {
            Ok(())
        }
    }

    struct NullSink;

    impl EffectSink for NullSink {
        fn dispatch(&mut self, effect: Effect) -> Result<(), EffectError> {
            Err(EffectError::Unavailable(effect.kind()))
        }
    }

    fn session() -> Coordinator<SilentEngine> {
        Coordinator::new(SessionSettings::default(), SilentEngine)
    }

    #[test]
    fn inactive_session_ignores_timer_and_pointer() {
        let mut session = session();
        assert!(!session.on_rotation_tick());
        session.on_pointer_moved(Position::new(1.0, 1.0), Instant::now());
        assert_eq!(session.fact_index(), 0);
        assert!(session.trail().is_empty());
    }

    #[test]
    fn active_session_routes_events_to_slices() {
        let mut session = session();
        session.start();
        assert!(session.rotator().is_running());

        assert!(session.on_rotation_tick());
        session.on_pointer_moved(Position::new(1.0, 1.0), Instant::now());

        assert_eq!(session.fact_index(), 1);
        assert_eq!(session.trail().len(), 1);
    }

    #[test]
    fn stop_releases_timer_and_clears_trail() {
        let mut session = session();
        session.start();
        session.on_pointer_moved(Position::new(1.0, 1.0), Instant::now());
        session.toggle_playback().ok();

        session.stop();

        assert!(!session.is_active());
        assert!(!session.rotator().is_running());
        assert!(session.trail().is_empty());
        assert!(!session.playback().is_playing());
    }

    #[test]
    fn likes_count_without_any_renderer() {
        let mut session = session();
        for _ in 0..4 {
            session.like(Position::default(), &mut NullSink);
        }
        assert_eq!(session.likes(), 4);
    }

    #[test]
    fn theme_toggle_returns_new_value() {
        let mut session = session();
        assert_eq!(session.toggle_theme(), ThemeFlag::Dark);
        assert_eq!(session.theme(), ThemeFlag::Dark);
    }
}
