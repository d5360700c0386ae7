use std::time::Instant;

use crate::transitions::TransitionConfig;

/// A single in-flight scalar interpolation between two fixed endpoints.
///
/// There is no callback registration: the owner polls `value_at` on each
/// tick and drops the animation once `is_complete` reports expiry. Dropping
/// it mid-flight is cancellation; whatever value was last applied stays.
#[derive(Debug, Clone, Copy)]
pub struct Animation {
    from: f32,
    to: f32,
    start: Instant,
    config: TransitionConfig,
}

impl Animation {
    pub fn new(from: f32, to: f32, start: Instant, config: TransitionConfig) -> Self {
        Self {
            from,
            to,
            start,
            config,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Eased interpolant at `now`. At or past the end this returns `to`
    /// exactly, so endpoint comparisons against 0.0 and 1.0 hold without
    /// floating-point residue.
    pub fn value_at(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        let eased = self.config.easing.apply(t);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.config.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.config.duration.as_secs_f32()).min(1.0)
    }
}
