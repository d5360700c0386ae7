use std::time::Instant;

use crate::transitions::TransitionConfig;

/// In-flight scroll-to-item animation.
///
/// Only the starting offset is captured; the target is re-read from the
/// current layout on every tick, so the destination keeps tracking an item
/// whose neighbors are still collapsing above it.
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    from: u16,
    start: Instant,
    config: TransitionConfig,
}

impl ScrollAnimation {
    pub fn new(from: u16, start: Instant, config: TransitionConfig) -> Self {
        Self {
            from,
            start,
            config,
        }
    }

    /// Eased offset at `now`, interpolating toward `target`. At or past the
    /// end this returns `target` exactly.
    pub fn offset_at(&self, now: Instant, target: u16) -> u16 {
        let t = self.progress(now);
        if t >= 1.0 {
            return target;
        }
        lerp_u16(self.from, target, self.config.easing.apply(t))
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

/// Vertical scroll position of the container, with at most one animation or
/// pending jump in flight.
#[derive(Debug, Default)]
pub struct ScrollState {
    offset: u16,
    animation: Option<ScrollAnimation>,
    pending_jump: bool,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Jump directly to an offset, cancelling anything in flight.
    pub fn set_offset(&mut self, offset: u16) {
        self.cancel();
        self.offset = offset;
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn has_pending_jump(&self) -> bool {
        self.pending_jump
    }

    /// Begin animating from the current offset toward the active item.
    /// Replaces any animation or jump already in flight.
    pub(crate) fn animate_to_item(&mut self, now: Instant, config: TransitionConfig) {
        self.pending_jump = false;
        self.animation = Some(ScrollAnimation::new(self.offset, now, config));
    }

    /// Schedule an immediate jump for the next layout pass, when the active
    /// item's final position is known.
    pub(crate) fn schedule_jump(&mut self) {
        self.animation = None;
        self.pending_jump = true;
    }

    pub(crate) fn cancel(&mut self) {
        self.animation = None;
        self.pending_jump = false;
    }

    /// Advance the animation toward `target`. Returns true if the offset
    /// changed.
    pub(crate) fn tick(&mut self, now: Instant, target: u16) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };
        let next = animation.offset_at(now, target);
        let changed = next != self.offset;
        self.offset = next;
        if animation.is_complete(now) {
            self.animation = None;
        }
        changed
    }

    /// Resolve a pending jump and clamp the offset to the layout's scroll
    /// range.
    pub(crate) fn after_layout(&mut self, target: Option<u16>, max_scroll: u16) {
        if self.pending_jump {
            self.pending_jump = false;
            if let Some(top) = target {
                log::debug!("[scroll] jump to {top}");
                self.offset = top;
            }
        }
        self.offset = self.offset.min(max_scroll);
    }
}

/// Linear interpolation between cell offsets.
fn lerp_u16(from: u16, to: u16, t: f32) -> u16 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round() as u16
}
