// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background behind every card.
pub fn page(scheme: &ColorScheme, background: Color) -> impl Fn(&Theme) -> container::Style {
    let text = scheme.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        ..Default::default()
    }
}

/// Rounded card surface.
pub fn card(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = scheme.surface_primary;
    let text = scheme.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        text_color: Some(text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Pill-shaped badge for breed traits.
pub fn badge(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = scheme.surface_secondary;
    let accent = scheme.brand_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(accent),
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}
