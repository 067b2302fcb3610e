// SPDX-License-Identifier: MPL-2.0
//! Volume slider style.

use crate::ui::theming::ColorScheme;
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Brand-colored rail with a round handle.
pub fn volume(scheme: &ColorScheme) -> impl Fn(&Theme, slider::Status) -> slider::Style {
    let filled = scheme.brand_primary;
    let empty = scheme.surface_secondary;
    let hover = scheme.brand_accent;
    move |_theme: &Theme, status: slider::Status| {
        let handle = match status {
            slider::Status::Hovered | slider::Status::Dragged => hover,
            _ => filled,
        };

        slider::Style {
            rail: slider::Rail {
                backgrounds: (Background::Color(filled), Background::Color(empty)),
                width: 4.0,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 2.0.into(),
                },
            },
            handle: slider::Handle {
                shape: slider::HandleShape::Circle { radius: 7.0 },
                background: Background::Color(handle),
                border_width: 0.0,
                border_color: Color::TRANSPARENT,
            },
        }
    }
}
