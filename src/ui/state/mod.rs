// SPDX-License-Identifier: MPL-2.0
//! Presentation-only animation state.
//!
//! Nothing here feeds back into the session; it only decides what the
//! canvases and the like button look like on the next frame.

pub mod confetti;
pub mod pulse;

pub use confetti::{ConfettiField, Particle};
pub use pulse::PulseState;
