// SPDX-License-Identifier: MPL-2.0
//! Bridges session effects onto the on-screen renderers.

use crate::error::EffectError;
use crate::session::{Effect, EffectSink};
use crate::ui::design_tokens::palette;
use crate::ui::notifications::{self, Notification, Severity};
use crate::ui::state::{ConfettiField, PulseState};
use std::time::Instant;

/// Borrowed view of the renderers for the duration of one dispatch.
pub struct UiEffects<'a> {
    pub confetti: &'a mut ConfettiField,
    pub pulse: &'a mut PulseState,
    pub notifications: &'a mut notifications::Manager,
    pub now: Instant,
}

impl EffectSink for UiEffects<'_> {
    fn dispatch(&mut self, effect: Effect) -> Result<(), EffectError> {
        match effect {
            Effect::Burst { shape, origin } => {
                self.confetti
                    .burst(shape, origin, palette::CONFETTI.len(), self.now);
            }
            Effect::Pulse {
                peak_scale,
                duration,
            } => self.pulse.start(peak_scale, duration, self.now),
            Effect::Notify {
                message,
                detail,
                icon,
            } => {
                self.notifications
                    .push(Notification::new(Severity::from(icon), message).with_detail(detail));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BurstShape;
    use crate::session::{NotifyIcon, Position};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    #[test]
    fn each_effect_reaches_its_renderer() {
        let now = Instant::now();
        let mut confetti = ConfettiField::new(StdRng::seed_from_u64(5));
        let mut pulse = PulseState::default();
        let mut manager = notifications::Manager::new();

        let mut sink = UiEffects {
            confetti: &mut confetti,
            pulse: &mut pulse,
            notifications: &mut manager,
            now,
        };
        sink.dispatch(Effect::Burst {
            shape: BurstShape::new(8, 70.0),
            origin: Position::new(1.0, 2.0),
        })
        .unwrap();
        sink.dispatch(Effect::Pulse {
            peak_scale: 1.2,
            duration: Duration::from_millis(300),
        })
        .unwrap();
        sink.dispatch(Effect::Notify {
            message: "Thanks for the love!".into(),
            detail: "You've shown 1 cat some love".into(),
            icon: NotifyIcon::Heart,
        })
        .unwrap();

        assert_eq!(confetti.particles().len(), 8);
        assert!(pulse.is_animating(now));
        let toast = manager.visible().next().unwrap();
        assert_eq!(toast.severity(), Severity::Love);
        assert_eq!(toast.detail(), Some("You've shown 1 cat some love"));
    }
}
