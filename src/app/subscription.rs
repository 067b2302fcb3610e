// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The pointer listener and the rotation timer only exist while the session
//! is active; dropping them from [`App::subscription`](super::App) is what
//! unsubscribes them.

use super::Message;
use crate::ui::notifications::NotificationMessage;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Roughly 60 frames per second.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Auto-dismiss check period for toasts.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// Window events, plus pointer motion while the session is active.
///
/// Close requests are always routed so the session can be stopped before
/// the window goes away.
pub fn create_event_subscription(active: bool) -> Subscription<Message> {
    if active {
        event::listen_with(|event, _status, window_id| match event {
            event::Event::Window(iced::window::Event::CloseRequested) => {
                Some(Message::WindowCloseRequested(window_id))
            }
            // Motion is recorded even over buttons, so the status is ignored.
            event::Event::Mouse(iced::mouse::Event::CursorMoved { position }) => {
                Some(Message::PointerMoved(position))
            }
            _ => None,
        })
    } else {
        event::listen_with(|event, _status, window_id| {
            if let event::Event::Window(iced::window::Event::CloseRequested) = event {
                Some(Message::WindowCloseRequested(window_id))
            } else {
                None
            }
        })
    }
}

/// Periodic fact rotation while the session is active.
pub fn create_rotation_subscription(active: bool, interval: Duration) -> Subscription<Message> {
    if active {
        time::every(interval).map(Message::RotateFact)
    } else {
        Subscription::none()
    }
}

/// Animation frames while something on screen is moving.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Frame)
    } else {
        Subscription::none()
    }
}

/// Auto-dismiss ticks while toasts are showing or queued.
pub fn create_notification_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK)
            .map(|instant| Message::Notification(NotificationMessage::Tick(instant)))
    } else {
        Subscription::none()
    }
}
