// SPDX-License-Identifier: MPL-2.0
//! Root view: page, then trail, confetti and toasts stacked on top.

use super::{App, Message};
use crate::ui::notifications::Toast;
use crate::ui::page;
use crate::ui::styles;
use crate::ui::widgets::{ConfettiCanvas, TrailCanvas};
use iced::widget::{Container, Stack};
use iced::{Element, Length};
use std::time::Instant;

pub(super) fn view(app: &App, now: Instant) -> Element<'_, Message> {
    let theme = app.session.theme();
    let playback = app.session.playback();

    let page = page::view(page::ViewContext {
        state: &app.page,
        scheme: &app.scheme,
        theme,
        likes: app.session.likes(),
        fact_index: app.session.fact_index(),
        fact_count: app.session.rotator().len().get(),
        is_playing: playback.is_playing(),
        volume: playback.volume().value(),
        like_scale: app.pulse.scale(now),
        series: &app.series,
    })
    .map(Message::Page);

    let background = Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page(
            &app.scheme,
            app.scheme.page_background(theme),
        ));

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(background);

    let dots = app.session.visible_trail(now);
    if !dots.is_empty() {
        stack = stack.push(TrailCanvas::new(dots, app.scheme.trail).into_element());
    }
    if !app.confetti.is_empty() {
        stack = stack.push(ConfettiCanvas::snapshot(&app.confetti, now).into_element());
    }
    if app.notifications.has_notifications() {
        stack = stack.push(Toast::view_overlay(&app.notifications).map(Message::Notification));
    }

    stack.into()
}
