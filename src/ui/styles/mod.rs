// SPDX-License-Identifier: MPL-2.0
//! Widget styles derived from the active [`ColorScheme`](crate::ui::theming::ColorScheme).

pub mod button;
pub mod container;
pub mod slider;
