//! Transient "Copied!" confirmation.

use std::time::Duration;

use super::animation::EffectTimer;

/// Badge shown after a successful copy, hidden again once its timer runs out.
///
/// Showing it again while visible restarts the countdown instead of stacking.
#[derive(Debug, Clone)]
pub struct CopiedBadge {
    duration: Duration,
    timer: Option<EffectTimer>,
}

impl CopiedBadge {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            timer: None,
        }
    }

    pub fn show(&mut self) {
        self.timer = Some(EffectTimer::new(self.duration));
    }

    pub fn hide(&mut self) {
        self.timer = None;
    }

    pub fn advance(&mut self, delta: Duration) {
        if let Some(timer) = self.timer.as_mut() {
            timer.advance(delta);
            if timer.is_finished() {
                self.timer = None;
            }
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.timer.is_some()
    }
}
