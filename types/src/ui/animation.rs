use std::time::Duration;

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// Elapsed-time accumulator for a fixed-duration effect.
///
/// Driven by explicit `advance` calls so callers decide what "time" means
/// (frame deltas in the UI, synthetic steps in tests).
#[derive(Debug, Clone)]
pub(crate) struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub(crate) fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    pub(crate) fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::EffectTimer;
    use std::time::Duration;

    #[test]
    fn zero_duration_immediately_finished() {
        let timer = EffectTimer::new(Duration::ZERO);
        assert!(timer.is_finished());
        assert!((timer.progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn finishes_once_duration_elapses() {
        let mut timer = EffectTimer::new(Duration::from_millis(200));
        timer.advance(Duration::from_millis(50));
        assert!((timer.progress() - 0.25).abs() < f32::EPSILON);
        timer.advance(Duration::from_millis(149));
        assert!(!timer.is_finished());
        timer.advance(Duration::from_millis(1));
        assert!(timer.is_finished());
    }

    #[test]
    fn advance_saturates() {
        let mut timer = EffectTimer::new(Duration::from_millis(10));
        timer.advance(Duration::MAX);
        timer.advance(Duration::from_millis(1));
        assert!(timer.is_finished());
        assert!(timer.progress() <= 1.0);
    }
}
