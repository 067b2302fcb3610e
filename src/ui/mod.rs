// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Elm-style "state down, messages up": the page emits [`page::Message`]s,
//! the application turns the resulting events into session calls.
//!
//! # Modules
//!
//! - [`page`] - The single page (hero, tabs, ticker, chart, audio card)
//! - [`state`] - Animation state (confetti field, like pulse)
//! - [`widgets`] - Canvas overlays (pointer trail, confetti, chart)
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers, slider)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark color schemes and the configured theme mode

pub mod design_tokens;
pub mod notifications;
pub mod page;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
