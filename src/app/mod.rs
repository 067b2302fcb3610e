// SPDX-License-Identifier: MPL-2.0
//! Application root: wires the session coordinator to Iced.
//!
//! The `App` owns the [`Coordinator`] and the presentation-only state
//! (confetti, pulse, toasts, tab selection). Every timer tick and pointer
//! event is forwarded to the coordinator; the view reads it back.

mod effects;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use effects::UiEffects;
pub use message::{Flags, Message};

use crate::audio::CpalEngine;
use crate::catalog;
use crate::config::{self, Config};
use crate::series::{AdoptionSeries, SeriesProvider, SyntheticSeries};
use crate::session::{Coordinator, Position, SessionSettings, ThemeFlag};
use crate::ui::notifications::{self, Notification};
use crate::ui::page;
use crate::ui::state::{ConfettiField, PulseState};
use crate::ui::theming::ColorScheme;
use iced::{window, Element, Subscription, Task, Theme};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1000.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

/// Root Iced application state.
pub struct App {
    session: Coordinator<CpalEngine>,
    page: page::State,
    scheme: ColorScheme,
    series: AdoptionSeries,
    confetti: ConfettiField,
    pulse: PulseState,
    notifications: notifications::Manager,
    /// Last known cursor position; origin of the like burst.
    cursor: Option<Position>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("session", &self.session)
            .field("page", &self.page)
            .field("notifications", &self.notifications.visible_count())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
///
/// Closing is intercepted so the session can be stopped before exit.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Translates the loaded configuration into session tunables.
#[must_use]
pub fn session_settings(config: &Config, theme: ThemeFlag) -> SessionSettings {
    SessionSettings {
        fact_count: catalog::fact_count(),
        ticker_interval: config.ticker_interval(),
        trail_capacity: config.trail_capacity(),
        trail_fade: config.trail_fade(),
        volume: config.volume(),
        burst: config.burst(),
        theme,
    }
}

impl App {
    /// Loads the configuration, builds the session and starts it.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();

        let theme = flags
            .theme
            .unwrap_or(config.general.theme_mode)
            .initial_flag();
        let settings = session_settings(&config, theme);

        let (series_provider, confetti_rng) = match flags.seed {
            Some(seed) => (
                SyntheticSeries::seeded(seed),
                StdRng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => (SyntheticSeries::from_entropy(), StdRng::from_entropy()),
        };

        let mut app = App {
            session: Coordinator::new(settings, CpalEngine::new(settings.volume)),
            page: page::State::default(),
            scheme: ColorScheme::for_flag(theme),
            series: generate_series(series_provider),
            confetti: ConfettiField::new(confetti_rng),
            pulse: PulseState::default(),
            notifications: notifications::Manager::new(),
            cursor: None,
        };

        if let Some(warning) = config_warning {
            app.notifications.push(Notification::warning(warning));
        }

        app.session.start();
        tracing::debug!(?settings, "application ready");

        (app, Task::none())
    }

    fn title(&self) -> String {
        "Feline Fascination".to_string()
    }

    fn theme(&self) -> Theme {
        if self.session.theme().is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Whether any on-screen animation still needs frames.
    fn is_animating(&self, now: Instant) -> bool {
        !self.confetti.is_empty()
            || self.pulse.is_animating(now)
            || self.session.trail_is_fading(now)
    }

    fn subscription(&self) -> Subscription<Message> {
        let active = self.session.is_active();
        let event_sub = subscription::create_event_subscription(active);
        let rotation_sub = subscription::create_rotation_subscription(
            active,
            self.session.rotator().interval().as_duration(),
        );
        let frame_sub = subscription::create_frame_subscription(self.is_animating(Instant::now()));
        let notification_sub =
            subscription::create_notification_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, rotation_sub, frame_sub, notification_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Page(page_message) => {
                let event = page::update(&mut self.page, page_message);
                self.handle_page_event(event);
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::PointerMoved(point) => {
                let position = Position::new(point.x, point.y);
                self.cursor = Some(position);
                self.session.on_pointer_moved(position, Instant::now());
                Task::none()
            }
            Message::RotateFact(_instant) => {
                self.session.on_rotation_tick();
                Task::none()
            }
            Message::Frame(now) => {
                self.confetti.prune(now);
                self.pulse.settle(now);
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                self.session.stop();
                window::close(id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self, Instant::now())
    }
}

fn generate_series(mut provider: impl SeriesProvider) -> AdoptionSeries {
    provider.generate_monthly_series()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn session_settings_follow_config() {
        let mut config = Config::default();
        config.trail.capacity = Some(7);
        config.audio.volume = Some(0.25);
        config.ticker.interval_ms = Some(2_000);

        let settings = session_settings(&config, ThemeFlag::Dark);
        assert_eq!(settings.trail_capacity.value(), 7);
        assert_abs_diff_eq!(settings.volume.value(), 0.25);
        assert_eq!(settings.ticker_interval.millis(), 2_000);
        assert_eq!(settings.theme, ThemeFlag::Dark);
        assert_eq!(settings.fact_count, catalog::fact_count());
    }

    #[test]
    fn window_close_is_intercepted() {
        assert!(!window_settings().exit_on_close_request);
    }
}
