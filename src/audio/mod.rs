// SPDX-License-Identifier: MPL-2.0
//! Ambient audio for the playback card.
//!
//! The session only talks to the [`AudioEngine`] trait. The production
//! engine ([`CpalEngine`]) synthesizes a soft purr and streams it through
//! the default output device with cpal.

mod output;
mod tone;

pub use output::CpalEngine;
pub use tone::Purr;

use crate::domain::Volume;
use crate::error::AudioError;

/// Capability set the playback controller consumes.
///
/// Calls are fire-and-forget: they report success or failure immediately
/// and never queue work for later.
pub trait AudioEngine {
    /// Starts or resumes output.
    ///
    /// # Errors
    ///
    /// Returns an [`AudioError`] when the output cannot start.
    fn play(&mut self) -> Result<(), AudioError>;

    /// Silences output without releasing the device.
    ///
    /// # Errors
    ///
    /// Returns an [`AudioError`] when the stream refuses to pause.
    fn pause(&mut self) -> Result<(), AudioError>;

    /// Applies a new output gain, whether or not audio is playing.
    ///
    /// # Errors
    ///
    /// Returns an [`AudioError`] when the gain cannot be applied.
    fn set_volume(&mut self, volume: Volume) -> Result<(), AudioError>;
}
