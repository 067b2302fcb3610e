// SPDX-License-Identifier: MPL-2.0
//! `feline_fascination` is a single-page cat showcase built with the Iced
//! GUI framework.
//!
//! The interesting part is the [`session`] coordinator: it owns every piece
//! of mutable state (likes, fact ticker, pointer trail, audio playback and
//! theme) and has no GUI types, so tests drive it with explicit instants
//! and fake collaborators. [`app`] wires it to
//! Iced, [`audio`] provides the cpal output and [`ui`] renders the page.

pub mod app;
pub mod audio;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod series;
pub mod session;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
