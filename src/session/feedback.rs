// SPDX-License-Identifier: MPL-2.0
//! Like counter and its celebratory side effects.
//!
//! The counter is committed before any effect is requested, and effects are
//! best-effort: a missing renderer degrades the celebration, never the count.

use super::trail::Position;
use crate::domain::BurstShape;
use crate::error::EffectError;
use std::time::Duration;

/// Icon requested alongside a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyIcon {
    Heart,
    Info,
    Warning,
}

/// A presentation side effect requested by the core.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Confetti burst from `origin`.
    Burst { shape: BurstShape, origin: Position },
    /// Short scale animation on the triggering control.
    Pulse { peak_scale: f32, duration: Duration },
    /// Transient toast.
    Notify {
        message: String,
        detail: String,
        icon: NotifyIcon,
    },
}

impl Effect {
    /// Short name used in logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Effect::Burst { .. } => "burst",
            Effect::Pulse { .. } => "pulse",
            Effect::Notify { .. } => "notify",
        }
    }
}

/// Receiver of presentation effects.
pub trait EffectSink {
    /// Starts `effect`. Fire-and-forget: the caller never waits on it.
    ///
    /// # Errors
    ///
    /// Returns [`EffectError::Unavailable`] when the renderer is not mounted.
    fn dispatch(&mut self, effect: Effect) -> Result<(), EffectError>;
}

/// Result of one like.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerOutcome {
    /// Counter value after the increment.
    pub likes: u64,
    /// Effects that could not be started, in dispatch order.
    pub failed: Vec<(&'static str, EffectError)>,
}

/// Like counter plus the fixed celebration recipe.
#[derive(Debug, Clone)]
pub struct FeedbackDispatcher {
    likes: u64,
    burst: BurstShape,
    pulse_peak: f32,
    pulse_duration: Duration,
}

impl FeedbackDispatcher {
    #[must_use]
    pub fn new(burst: BurstShape, pulse_peak: f32, pulse_duration: Duration) -> Self {
        Self {
            likes: 0,
            burst,
            pulse_peak,
            pulse_duration,
        }
    }

    /// Counts one like and requests burst, pulse and notification, in that
    /// order, from `sink`.
    pub fn trigger(&mut self, origin: Position, sink: &mut dyn EffectSink) -> TriggerOutcome {
        self.likes = self.likes.saturating_add(1);
        tracing::info!(likes = self.likes, "like recorded");

        let effects = [
            Effect::Burst {
                shape: self.burst,
                origin,
            },
            Effect::Pulse {
                peak_scale: self.pulse_peak,
                duration: self.pulse_duration,
            },
            Effect::Notify {
                message: "Thanks for the love!".to_string(),
                detail: love_detail(self.likes),
                icon: NotifyIcon::Heart,
            },
        ];

        let mut failed = Vec::new();
        for effect in effects {
            let kind = effect.kind();
            if let Err(err) = sink.dispatch(effect) {
                tracing::warn!(effect = kind, %err, "feedback effect dropped");
                failed.push((kind, err));
            }
        }

        TriggerOutcome {
            likes: self.likes,
            failed,
        }
    }

    #[must_use]
    pub fn likes(&self) -> u64 {
        self.likes
    }

    #[must_use]
    pub fn burst(&self) -> BurstShape {
        self.burst
    }
}

fn love_detail(likes: u64) -> String {
    if likes == 1 {
        "You've shown 1 cat some love".to_string()
    } else {
        format!("You've shown {likes} cats some love")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<Effect>,
        reject: Vec<&'static str>,
    }

    impl EffectSink for Recorder {
        fn dispatch(&mut self, effect: Effect) -> Result<(), EffectError> {
            let kind = effect.kind();
            self.seen.push(effect);
            if self.reject.contains(&kind) {
                Err(EffectError::Unavailable(kind))
            } else {
                Ok(())
            }
        }
    }

    fn dispatcher() -> FeedbackDispatcher {
        FeedbackDispatcher::new(BurstShape::default(), 1.2, Duration::from_millis(300))
    }

    #[test]
    fn effects_are_requested_in_fixed_order() {
        let mut sink = Recorder::default();
        let outcome = dispatcher().trigger(Position::new(10.0, 20.0), &mut sink);

        let kinds: Vec<_> = sink.seen.iter().map(Effect::kind).collect();
        assert_eq!(kinds, vec!["burst", "pulse", "notify"]);
        assert_eq!(outcome.likes, 1);
        assert!(outcome.failed.is_empty());
    }

    #[test]
    fn burst_carries_shape_and_origin() {
        let mut sink = Recorder::default();
        dispatcher().trigger(Position::new(3.0, 4.0), &mut sink);

        assert_eq!(
            sink.seen[0],
            Effect::Burst {
                shape: BurstShape::default(),
                origin: Position::new(3.0, 4.0),
            }
        );
    }

    #[test]
    fn counter_survives_failed_effects() {
        let mut sink = Recorder {
            reject: vec!["burst", "notify"],
            ..Recorder::default()
        };
        let mut dispatcher = dispatcher();

        for _ in 0..7 {
            dispatcher.trigger(Position::default(), &mut sink);
        }
        let outcome = dispatcher.trigger(Position::default(), &mut sink);

        assert_eq!(dispatcher.likes(), 8);
        assert_eq!(outcome.likes, 8);
        assert_eq!(
            outcome.failed,
            vec![
                ("burst", EffectError::Unavailable("burst")),
                ("notify", EffectError::Unavailable("notify")),
            ]
        );
        // Every effect was still attempted.
        assert_eq!(sink.seen.len(), 24);
    }

    #[test]
    fn notification_counts_likes() {
        let mut sink = Recorder::default();
        let mut dispatcher = dispatcher();
        dispatcher.trigger(Position::default(), &mut sink);
        dispatcher.trigger(Position::default(), &mut sink);

        match sink.seen.last() {
            Some(Effect::Notify { detail, icon, .. }) => {
                assert_eq!(detail, "You've shown 2 cats some love");
                assert_eq!(*icon, NotifyIcon::Heart);
            }
            other => panic!("expected notify, got {other:?}"),
        }
    }
}
