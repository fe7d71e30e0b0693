//! One-time fade-in for page sections.

use std::time::Duration;

use super::animation::EffectTimer;

/// How far a section has been revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealLevel {
    /// Never entered the viewport.
    Hidden,
    Fading { progress: f32 },
    Shown,
}

#[derive(Debug, Clone)]
enum RevealState {
    Fading(EffectTimer),
    Shown,
}

/// Per-section reveal state, keyed by section id.
///
/// A section starts fading the first time it is entered and never hides
/// again. With reduced motion (or a zero duration) entering shows it at once.
#[derive(Debug, Clone)]
pub struct SectionReveal {
    duration: Duration,
    reduced_motion: bool,
    entries: Vec<(String, RevealState)>,
}

impl SectionReveal {
    #[must_use]
    pub fn new(duration: Duration, reduced_motion: bool) -> Self {
        Self {
            duration,
            reduced_motion,
            entries: Vec::new(),
        }
    }

    /// Mark `id` as entered. Returns `true` the first time only.
    pub fn enter(&mut self, id: &str) -> bool {
        if self.entries.iter().any(|(entry, _)| entry == id) {
            return false;
        }
        let state = if self.reduced_motion || self.duration.is_zero() {
            RevealState::Shown
        } else {
            RevealState::Fading(EffectTimer::new(self.duration))
        };
        self.entries.push((id.to_string(), state));
        true
    }

    pub fn advance(&mut self, delta: Duration) {
        for (_, state) in &mut self.entries {
            if let RevealState::Fading(timer) = state {
                timer.advance(delta);
                if timer.is_finished() {
                    *state = RevealState::Shown;
                }
            }
        }
    }

    /// Switching reduced motion on finishes every fade in progress.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        self.reduced_motion = reduced_motion;
        if reduced_motion {
            for (_, state) in &mut self.entries {
                *state = RevealState::Shown;
            }
        }
    }

    #[must_use]
    pub fn level(&self, id: &str) -> RevealLevel {
        match self.entries.iter().find(|(entry, _)| entry == id) {
            None => RevealLevel::Hidden,
            Some((_, RevealState::Fading(timer))) => RevealLevel::Fading {
                progress: timer.progress(),
            },
            Some((_, RevealState::Shown)) => RevealLevel::Shown,
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, state)| matches!(state, RevealState::Fading(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::{RevealLevel, SectionReveal};
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn hidden_until_entered() {
        let reveal = SectionReveal::new(ms(600), false);
        assert_eq!(reveal.level("projects"), RevealLevel::Hidden);
        assert!(!reveal.is_animating());
    }

    #[test]
    fn fades_in_once() {
        let mut reveal = SectionReveal::new(ms(600), false);
        assert!(reveal.enter("projects"));
        assert!(matches!(
            reveal.level("projects"),
            RevealLevel::Fading { progress } if progress < f32::EPSILON
        ));

        reveal.advance(ms(300));
        assert!(matches!(
            reveal.level("projects"),
            RevealLevel::Fading { progress } if (progress - 0.5).abs() < 0.01
        ));

        reveal.advance(ms(300));
        assert_eq!(reveal.level("projects"), RevealLevel::Shown);
        assert!(!reveal.is_animating());

        assert!(!reveal.enter("projects"));
        assert_eq!(reveal.level("projects"), RevealLevel::Shown);
    }

    #[test]
    fn reduced_motion_shows_immediately() {
        let mut reveal = SectionReveal::new(ms(600), true);
        reveal.enter("about");
        assert_eq!(reveal.level("about"), RevealLevel::Shown);
    }

    #[test]
    fn enabling_reduced_motion_finishes_fades() {
        let mut reveal = SectionReveal::new(ms(600), false);
        reveal.enter("about");
        reveal.advance(ms(100));
        reveal.set_reduced_motion(true);
        assert_eq!(reveal.level("about"), RevealLevel::Shown);
        assert!(!reveal.is_animating());
    }
}
