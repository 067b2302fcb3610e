// SPDX-License-Identifier: MPL-2.0
//! Bar chart of monthly adoptions.
#![allow(clippy::cast_precision_loss)]

use crate::series::AdoptionSeries;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Text};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

/// Space reserved under the bars for month labels.
const LABEL_BAND: f32 = 20.0;
/// Fraction of a slot occupied by its bar.
const BAR_FILL: f32 = 0.6;

pub struct AdoptionChart<'a> {
    series: &'a AdoptionSeries,
    bar: Color,
    label: Color,
}

impl<'a> AdoptionChart<'a> {
    #[must_use]
    pub fn new(series: &'a AdoptionSeries, bar: Color, label: Color) -> Self {
        Self { series, bar, label }
    }

    pub fn into_element<Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CHART_HEIGHT))
            .into()
    }
}

/// Bar height for `value` in a plot area of `plot_height`.
fn bar_height(value: u32, max: u32, plot_height: f32) -> f32 {
    if max == 0 {
        return 0.0;
    }
    plot_height * value as f32 / max as f32
}

impl<Message> canvas::Program<Message> for AdoptionChart<'_> {
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

        let plot_height = (bounds.height - LABEL_BAND - spacing::XS).max(0.0);
        let slot = bounds.width / 12.0;
        let bar_width = slot * BAR_FILL;
        let max = self.series.max_value();

        for (i, point) in self.series.points().enumerate() {
            let h = bar_height(point.value, max, plot_height);
            let x = slot * i as f32 + (slot - bar_width) / 2.0;
            let top = plot_height - h;

            let bar = Path::rounded_rectangle(
                Point::new(x, top),
                Size::new(bar_width, h),
                radius::SM.into(),
            );
            frame.fill(&bar, self.bar);

            frame.fill_text(Text {
                content: point.label().to_string(),
                position: Point::new(x, plot_height + spacing::XXS),
                color: self.label,
                size: typography::CAPTION.into(),
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}
