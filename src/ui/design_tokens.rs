// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

All visual constants of the page live here.

## Organization

- **Palette**: Base colors (purple and pink brand scale)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use feline_fascination::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.11, 0.09, 0.15);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.28, 0.35);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.43, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.76, 0.82);
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.94, 0.97);

    // Brand colors (purple scale)
    pub const PURPLE_100: Color = Color::from_rgb(0.95, 0.91, 1.0);
    pub const PURPLE_400: Color = Color::from_rgb(0.75, 0.52, 0.99);
    pub const PURPLE_500: Color = Color::from_rgb(0.66, 0.33, 0.97);
    pub const PURPLE_600: Color = Color::from_rgb(0.58, 0.2, 0.92);

    // Accent (pink scale)
    pub const PINK_400: Color = Color::from_rgb(0.96, 0.45, 0.71);
    pub const PINK_500: Color = Color::from_rgb(0.93, 0.28, 0.6);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);

    /// Colors cycled through by confetti particles.
    pub const CONFETTI: [Color; 5] = [PURPLE_500, PINK_500, PURPLE_400, PINK_400, WARNING_500];
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Card background - Semi-transparent panels
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Maximum width of the centered page column.
    pub const PAGE_MAX_WIDTH: f32 = 880.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const CHART_HEIGHT: f32 = 220.0;
    pub const VOLUME_SLIDER_WIDTH: f32 = 200.0;

    /// Radius of the newest trail dot.
    pub const TRAIL_DOT_RADIUS: f32 = 6.0;
    pub const CONFETTI_SIZE: f32 = 6.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero heading
    pub const DISPLAY: f32 = 40.0;

    /// Card titles
    pub const TITLE_MD: f32 = 20.0;

    /// Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Fact ticker text
    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Badges, chart labels
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.15,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(typography::DISPLAY > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY);
};
