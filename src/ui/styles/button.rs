// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Filled brand button (like, play).
pub fn primary(scheme: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let base = scheme.brand_primary;
    let hover = scheme.brand_accent;
    move |_theme: &Theme, status: button::Status| {
        let (background, shadow) = match status {
            button::Status::Hovered => (hover, shadow::LG),
            button::Status::Disabled => (
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..base
                },
                Shadow::default(),
            ),
            button::Status::Active | button::Status::Pressed => (base, shadow::SM),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow,
            snap: true,
        }
    }
}

/// Tab or carousel control; `selected` fills it with the brand color.
pub fn tab(scheme: &ColorScheme, selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    let brand = scheme.brand_primary;
    let surface = scheme.surface_secondary;
    let text = scheme.text_primary;
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = if selected {
            (brand, palette::WHITE)
        } else if status == button::Status::Hovered {
            (
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..brand
                },
                text,
            )
        } else {
            (surface, text)
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hover_switches_to_accent() {
        let scheme = ColorScheme::light();
        let style = primary(&scheme)(&Theme::Light, button::Status::Hovered);
        assert_eq!(
            style.background,
            Some(Background::Color(scheme.brand_accent))
        );
    }

    #[test]
    fn selected_tab_is_filled() {
        let scheme = ColorScheme::dark();
        let selected = tab(&scheme, true)(&Theme::Dark, button::Status::Active);
        let idle = tab(&scheme, false)(&Theme::Dark, button::Status::Active);
        assert_eq!(
            selected.background,
            Some(Background::Color(scheme.brand_primary))
        );
        assert_ne!(selected.background, idle.background);
    }
}
