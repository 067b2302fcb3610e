// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO external dependencies.
//!
//! This module contains pure domain types shared by the session coordinator
//! and the configuration loader. It has no dependencies on external crates
//! (except `std`) so the session slices stay testable without a renderer.
//!
//! # Modules
//!
//! - [`newtypes`]: range-checked values ([`Volume`], [`TickerInterval`],
//!   [`TrailCapacity`], [`FadeDuration`], [`BurstShape`])

pub mod newtypes;

pub use newtypes::{BurstShape, FadeDuration, TickerInterval, TrailCapacity, Volume};
