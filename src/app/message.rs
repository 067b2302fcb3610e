// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use crate::ui::page;
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Page(page::Message),
    Notification(notifications::NotificationMessage),
    /// Cursor moved, in window coordinates.
    PointerMoved(iced::Point),
    /// Fact rotation timer fired.
    RotateFact(Instant),
    /// Animation frame while confetti, pulse or trail are moving.
    Frame(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Overrides `[general] theme_mode` from the config file.
    pub theme: Option<ThemeMode>,
    /// Seed for the chart and confetti generators. Random when absent.
    pub seed: Option<u64>,
}
