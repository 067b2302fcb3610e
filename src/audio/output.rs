// SPDX-License-Identifier: MPL-2.0
//! Audio output using cpal.
//!
//! The device is opened lazily on the first `play()`, so a machine without
//! sound hardware only fails when the user actually asks for audio. Volume
//! and pause state live in atomics shared with the realtime callback.

use super::tone::Purr;
use super::AudioEngine;
use crate::domain::Volume;
use crate::error::AudioError;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

/// Shared state between audio thread and main thread.
struct SharedState {
    /// Current volume (stored as u32 bits of f32 for atomic access).
    volume_bits: AtomicU32,

    /// Pause state.
    paused: AtomicBool,
}

impl SharedState {
    fn new(initial_volume: f32) -> Self {
        Self {
            volume_bits: AtomicU32::new(initial_volume.to_bits()),
            paused: AtomicBool::new(true),
        }
    }

    fn volume(&self) -> f32 {
        f32::from_bits(self.volume_bits.load(Ordering::Relaxed))
    }

    fn set_volume(&self, volume: f32) {
        self.volume_bits.store(volume.to_bits(), Ordering::Relaxed);
    }

    fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Relaxed);
    }
}

/// An open output stream.
struct OpenStream {
    /// The audio stream (kept alive to maintain playback).
    stream: cpal::Stream,
    sample_rate: u32,
    channels: u16,
}

/// cpal-backed [`AudioEngine`] playing a synthesized purr.
pub struct CpalEngine {
    shared: Arc<SharedState>,
    open: Option<OpenStream>,
}

impl CpalEngine {
    /// Creates an engine without touching the audio device.
    #[must_use]
    pub fn new(initial_volume: Volume) -> Self {
        Self {
            shared: Arc::new(SharedState::new(initial_volume.value())),
            open: None,
        }
    }

    /// Opens the default output device and builds the stream.
    fn open_stream(&self) -> Result<OpenStream, AudioError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;

        let supported_config = device
            .default_output_config()
            .map_err(|e| AudioError::StreamConfig(e.to_string()))?;
        let sample_format = supported_config.sample_format();
        let config: cpal::StreamConfig = supported_config.into();
        let sample_rate = config.sample_rate.0;
        let channels = config.channels;

        let stream = match sample_format {
            cpal::SampleFormat::F32 => {
                Self::build_stream::<f32>(&device, &config, Arc::clone(&self.shared))?
            }
            cpal::SampleFormat::I16 => {
                Self::build_stream::<i16>(&device, &config, Arc::clone(&self.shared))?
            }
            cpal::SampleFormat::U16 => {
                Self::build_stream::<u16>(&device, &config, Arc::clone(&self.shared))?
            }
            _ => return Err(AudioError::UnsupportedSampleFormat),
        };

        tracing::info!(sample_rate, channels, "audio output opened");
        Ok(OpenStream {
            stream,
            sample_rate,
            channels,
        })
    }

    /// Builds an audio output stream for a specific sample format.
    fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        shared_state: Arc<SharedState>,
    ) -> Result<cpal::Stream, AudioError> {
        #[allow(clippy::cast_precision_loss)]
        let mut purr = Purr::new(config.sample_rate.0 as f32);
        let channels = usize::from(config.channels.max(1));

        device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    if shared_state.is_paused() {
                        for sample in data.iter_mut() {
                            *sample = T::from_sample(0.0f32);
                        }
                        return;
                    }

                    // Quadratic curve so the slider feels perceptually linear.
                    let volume = shared_state.volume();
                    let gain = volume * volume;

                    for frame in data.chunks_mut(channels) {
                        // Clamp just below 1.0: i16 conversion overflows at exactly 1.0.
                        let value = (purr.next_sample() * gain).clamp(-1.0, 0.999_999_9);
                        for sample in frame.iter_mut() {
                            *sample = T::from_sample(value);
                        }
                    }
                },
                |err| {
                    tracing::error!(%err, "audio output error");
                },
                None,
            )
            .map_err(|e| AudioError::StreamBuild(e.to_string()))
    }

    /// Returns the current volume.
    #[must_use]
    pub fn volume(&self) -> f32 {
        self.shared.volume()
    }

    /// Returns whether the device has been opened.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Returns the output sample rate and channel count, once open.
    #[must_use]
    pub fn format(&self) -> Option<(u32, u16)> {
        self.open.as_ref().map(|o| (o.sample_rate, o.channels))
    }
}

impl AudioEngine for CpalEngine {
    fn play(&mut self) -> Result<(), AudioError> {
        if self.open.is_none() {
            self.open = Some(self.open_stream()?);
        }
        if let Some(open) = &self.open {
            open.stream
                .play()
                .map_err(|e| AudioError::StreamStart(e.to_string()))?;
        }
        self.shared.set_paused(false);
        Ok(())
    }

    fn pause(&mut self) -> Result<(), AudioError> {
        // Silence immediately; the callback honours the flag even if the
        // backend cannot pause the stream itself.
        self.shared.set_paused(true);
        if let Some(open) = &self.open {
            open.stream
                .pause()
                .map_err(|e| AudioError::StreamStart(e.to_string()))?;
        }
        Ok(())
    }

    fn set_volume(&mut self, volume: Volume) -> Result<(), AudioError> {
        // Volume type guarantees valid range, no clamp needed
        self.shared.set_volume(volume.value());
        Ok(())
    }
}

impl std::fmt::Debug for CpalEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpalEngine")
            .field("volume", &self.shared.volume())
            .field("paused", &self.shared.is_paused())
            .field("format", &self.format())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_state_volume_operations() {
        let state = SharedState::new(0.8);
        assert!((state.volume() - 0.8).abs() < 0.001);

        state.set_volume(0.5);
        assert!((state.volume() - 0.5).abs() < 0.001);
    }

    #[test]
    fn shared_state_starts_paused() {
        let state = SharedState::new(1.0);
        assert!(state.is_paused());

        state.set_paused(false);
        assert!(!state.is_paused());
    }

    #[test]
    fn new_engine_does_not_open_the_device() {
        let engine = CpalEngine::new(Volume::new(0.3));
        assert!(!engine.is_open());
        assert!(engine.format().is_none());
        assert!((engine.volume() - 0.3).abs() < 0.001);
    }

    #[test]
    fn volume_applies_before_the_device_opens() {
        let mut engine = CpalEngine::new(Volume::default());
        assert!(engine.set_volume(Volume::new(0.9)).is_ok());
        assert!((engine.volume() - 0.9).abs() < 0.001);
        assert!(!engine.is_open());
    }

    #[test]
    fn pause_without_device_is_a_no_op() {
        let mut engine = CpalEngine::new(Volume::default());
        assert!(engine.pause().is_ok());
    }

    // Note: opening the stream requires actual audio hardware
    // and is better suited for manual testing.
    #[test]
    #[ignore = "requires audio hardware"]
    fn play_opens_the_device() {
        let mut engine = CpalEngine::new(Volume::default());
        if engine.play().is_ok() {
            assert!(engine.is_open());
            assert!(engine.format().is_some_and(|(rate, ch)| rate > 0 && ch > 0));
        }
    }
}
