// SPDX-License-Identifier: MPL-2.0
//! Full-window overlay drawing live confetti particles.

use crate::ui::design_tokens::{palette, sizing};
use crate::ui::state::ConfettiField;
use iced::widget::canvas::{self, Canvas, Frame, Geometry};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};
use std::time::Instant;

/// Snapshot of the field, resolved for one frame.
pub struct ConfettiCanvas {
    pieces: Vec<(Point, Color)>,
}

impl ConfettiCanvas {
    #[must_use]
    pub fn snapshot(field: &ConfettiField, now: Instant) -> Self {
        let pieces = field
            .particles()
            .iter()
            .filter_map(|particle| {
                let opacity = particle.opacity(now)?;
                let pos = particle.position_after(now.saturating_duration_since(particle.spawned_at));
                let base = palette::CONFETTI[particle.color % palette::CONFETTI.len()];
                Some((Point::new(pos.x, pos.y), Color { a: opacity, ..base }))
            })
            .collect();
        Self { pieces }
    }

    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for ConfettiCanvas {
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
        let half = sizing::CONFETTI_SIZE / 2.0;

        for (point, color) in &self.pieces {
            frame.fill_rectangle(
                Point::new(point.x - bounds.x - half, point.y - bounds.y - half),
                Size::new(sizing::CONFETTI_SIZE, sizing::CONFETTI_SIZE),
                *color,
            );
        }

        vec![frame.into_geometry()]
    }
}
