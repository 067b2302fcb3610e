// SPDX-License-Identifier: MPL-2.0
//! Purr synthesizer.
//!
//! A low carrier amplitude-modulated by a slow "breathing" envelope. Output
//! is mono, normalized to [-1.0, 1.0]; the stream duplicates it per channel.

use std::f32::consts::TAU;

/// Carrier frequency in Hz.
const CARRIER_HZ: f32 = 55.0;
/// Second harmonic mixed in for body.
const HARMONIC_HZ: f32 = 110.0;
/// Breathing rate in Hz.
const BREATH_HZ: f32 = 0.8;
/// Purr pulses per second.
const RUMBLE_HZ: f32 = 24.0;
/// Peak amplitude before volume is applied.
const PEAK: f32 = 0.6;

/// Stateful oscillator producing purr samples.
#[derive(Debug, Clone)]
pub struct Purr {
    sample_rate: f32,
    carrier: f32,
    harmonic: f32,
    breath: f32,
    rumble: f32,
}

impl Purr {
    /// Creates an oscillator for `sample_rate` Hz.
    #[must_use]
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate: sample_rate.max(1.0),
            carrier: 0.0,
            harmonic: 0.0,
            breath: 0.0,
            rumble: 0.0,
        }
    }

    /// Produces the next mono sample.
    pub fn next_sample(&mut self) -> f32 {
        let breath = 0.5 * (1.0 - (self.breath * TAU).cos());
        let rumble = 0.5 * (1.0 + (self.rumble * TAU).sin());
        let tone = 0.7 * (self.carrier * TAU).sin() + 0.3 * (self.harmonic * TAU).sin();

        self.carrier = advance(self.carrier, CARRIER_HZ, self.sample_rate);
        self.harmonic = advance(self.harmonic, HARMONIC_HZ, self.sample_rate);
        self.breath = advance(self.breath, BREATH_HZ, self.sample_rate);
        self.rumble = advance(self.rumble, RUMBLE_HZ, self.sample_rate);

        (tone * breath * rumble * PEAK).clamp(-1.0, 1.0)
    }
}

/// Advances a phase in [0, 1) by one sample.
fn advance(phase: f32, freq: f32, sample_rate: f32) -> f32 {
    (phase + freq / sample_rate).fract()
}
