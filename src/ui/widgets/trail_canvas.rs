// SPDX-License-Identifier: MPL-2.0
//! Full-window overlay drawing the pointer trail as fading dots.

use crate::session::FadingDot;
use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};

/// Canvas program for one frame of the trail.
pub struct TrailCanvas {
    dots: Vec<FadingDot>,
    color: Color,
}

impl TrailCanvas {
    /// Dots must be oldest first; later dots are drawn on top.
    #[must_use]
    pub fn new(dots: Vec<FadingDot>, color: Color) -> Self {
        Self { dots, color }
    }

    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Older dots shrink along with their opacity.
fn dot_radius(opacity: f32) -> f32 {
    sizing::TRAIL_DOT_RADIUS * (0.4 + 0.6 * opacity.clamp(0.0, 1.0))
}

impl<Message> canvas::Program<Message> for TrailCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for dot in &self.dots {
            // Positions are window coordinates; shift into the canvas.
            let center = Point::new(dot.position.x - bounds.x, dot.position.y - bounds.y);
            let circle = Path::circle(center, dot_radius(dot.opacity));
            frame.fill(
                &circle,
                Color {
                    a: self.color.a * dot.opacity,
                    ..self.color
                },
            );
        }

        vec![frame.into_geometry()]
    }
}
