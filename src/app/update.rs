// SPDX-License-Identifier: MPL-2.0
//! Handlers for page events that reach the session.

use super::{App, UiEffects};
use crate::error::AudioError;
use crate::session::Position;
use crate::ui::notifications::Notification;
use crate::ui::page::Event;
use crate::ui::theming::ColorScheme;
use std::time::Instant;

impl App {
    pub(super) fn handle_page_event(&mut self, event: Event) {
        match event {
            Event::None => {}
            Event::Like => self.handle_like(),
            Event::TogglePlayback => {
                if let Err(err) = self.session.toggle_playback() {
                    self.report_audio_error(&err);
                }
            }
            Event::VolumeChanged(value) => {
                if let Err(err) = self.session.set_volume(value) {
                    self.report_audio_error(&err);
                }
            }
            Event::ToggleTheme => {
                let flag = self.session.toggle_theme();
                self.scheme = ColorScheme::for_flag(flag);
            }
        }
    }

    fn handle_like(&mut self) {
        // The button was just clicked, so the cursor sits on it.
        let origin = self.cursor.unwrap_or(Position::new(
            super::WINDOW_DEFAULT_WIDTH / 2.0,
            super::WINDOW_DEFAULT_HEIGHT / 3.0,
        ));

        let mut sink = UiEffects {
            confetti: &mut self.confetti,
            pulse: &mut self.pulse,
            notifications: &mut self.notifications,
            now: Instant::now(),
        };
        let outcome = self.session.like(origin, &mut sink);
        if !outcome.failed.is_empty() {
            tracing::debug!(
                likes = outcome.likes,
                failed = outcome.failed.len(),
                "like partially rendered"
            );
        }
    }

    fn report_audio_error(&mut self, err: &AudioError) {
        tracing::warn!(%err, "audio request failed");
        self.notifications
            .push(Notification::warning(err.headline()).with_detail(err.to_string()));
    }
}
