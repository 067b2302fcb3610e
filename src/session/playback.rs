// SPDX-License-Identifier: MPL-2.0
//! Play/pause and volume for the single ambient audio source.

use crate::audio::AudioEngine;
use crate::domain::Volume;
use crate::error::AudioError;

/// Owns the audio engine and mirrors its acknowledged state.
#[derive(Debug)]
pub struct PlaybackController<E> {
    engine: E,
    is_playing: bool,
    volume: Volume,
}

impl<E: AudioEngine> PlaybackController<E> {
    /// Creates a paused controller. The engine is not touched until the
    /// first user action.
    pub fn new(engine: E, volume: Volume) -> Self {
        Self {
            engine,
            is_playing: false,
            volume,
        }
    }

    /// Flips between playing and paused.
    ///
    /// The flag only changes once the engine accepted the request, so a
    /// failed start leaves the controller paused. Returns the new state.
    ///
    /// # Errors
    ///
    /// Returns the engine's error unchanged; nothing is retried.
    pub fn toggle(&mut self) -> Result<bool, AudioError> {
        if self.is_playing {
            self.engine.pause()?;
            self.is_playing = false;
            tracing::debug!("playback paused");
        } else {
            // The engine may have been created lazily; make sure it starts at
            // the slider's value rather than its own default.
            self.engine.set_volume(self.volume)?;
            self.engine.play()?;
            self.is_playing = true;
            tracing::debug!(volume = self.volume.value(), "playback started");
        }
        Ok(self.is_playing)
    }

    /// Stores `value` clamped into [0, 1] and applies it to the engine,
    /// whether or not audio is currently playing.
    ///
    /// The stored volume is updated even when the engine rejects it, so the
    /// slider keeps the user's choice and the next successful start uses it.
    ///
    /// # Errors
    ///
    /// Returns the engine's error if the gain could not be applied.
    pub fn set_volume(&mut self, value: f32) -> Result<Volume, AudioError> {
        self.volume = Volume::new(value);
        self.engine.set_volume(self.volume)?;
        Ok(self.volume)
    }

    /// Pauses the engine if it is playing. Failures are logged only.
    pub fn shutdown(&mut self) {
        if self.is_playing {
            if let Err(err) = self.engine.pause() {
                tracing::warn!(%err, "failed to pause audio during teardown");
            }
            self.is_playing = false;
        }
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[derive(Debug, Default)]
    struct FakeEngine {
        fail_play: bool,
        fail_volume: bool,
        plays: u32,
        pauses: u32,
        applied: Vec<f32>,
    }

    impl AudioEngine for FakeEngine {
        fn play(&mut self) -> Result<(), AudioError> {
            if self.fail_play {
                return Err(AudioError::Rejected("no gesture".into()));
            }
            self.plays += 1;
            Ok(())
        }

        fn pause(&mut self) -> Result<(), AudioError> {
            self.pauses += 1;
            Ok(())
        }

        fn set_volume(&mut self, volume: Volume) -> Result<(), AudioError> {
            if self.fail_volume {
                return Err(AudioError::NoOutputDevice);
            }
            self.applied.push(volume.value());
            Ok(())
        }
    }

    #[test]
    fn starts_paused_at_default_volume() {
        let controller = PlaybackController::new(FakeEngine::default(), Volume::default());
        assert!(!controller.is_playing());
        assert_abs_diff_eq!(controller.volume().value(), 0.5);
    }

    #[test]
    fn toggle_plays_then_pauses() {
        let mut controller = PlaybackController::new(FakeEngine::default(), Volume::default());
        assert_eq!(controller.toggle(), Ok(true));
        assert_eq!(controller.toggle(), Ok(false));
        assert_eq!(controller.engine().plays, 1);
        assert_eq!(controller.engine().pauses, 1);
    }

    #[test]
    fn failed_play_is_surfaced_and_state_stays_paused() {
        let engine = FakeEngine {
            fail_play: true,
            ..FakeEngine::default()
        };
        let mut controller = PlaybackController::new(engine, Volume::default());

        let result = controller.toggle();
        assert!(matches!(result, Err(AudioError::Rejected(_))));
        assert!(!controller.is_playing());
    }

    #[test]
    fn set_volume_clamps_and_applies_while_paused() {
        let mut controller = PlaybackController::new(FakeEngine::default(), Volume::default());

        let low = controller.set_volume(-0.3).map(Volume::value);
        let high = controller.set_volume(1.7).map(Volume::value);

        assert_eq!(low, Ok(0.0));
        assert_eq!(high, Ok(1.0));
        assert_eq!(controller.engine().applied, vec![0.0, 1.0]);
        assert!(!controller.is_playing());
    }

    #[test]
    fn rejected_volume_is_still_remembered() {
        let engine = FakeEngine {
            fail_volume: true,
            ..FakeEngine::default()
        };
        let mut controller = PlaybackController::new(engine, Volume::default());

        assert!(controller.set_volume(0.9).is_err());
        assert_abs_diff_eq!(controller.volume().value(), 0.9);
    }

    #[test]
    fn shutdown_pauses_a_playing_engine() {
        let mut controller = PlaybackController::new(FakeEngine::default(), Volume::default());
        controller.toggle().ok();
        controller.shutdown();
        assert!(!controller.is_playing());
        assert_eq!(controller.engine().pauses, 1);

        // Already paused: no extra engine call.
        controller.shutdown();
        assert_eq!(controller.engine().pauses, 1);
    }
}
