// SPDX-License-Identifier: MPL-2.0
pub mod chart;
pub mod confetti;
pub mod trail_canvas;

pub use chart::AdoptionChart;
pub use confetti::ConfettiCanvas;
pub use trail_canvas::TrailCanvas;
