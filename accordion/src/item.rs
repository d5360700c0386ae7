use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crate::animation::Animation;
use crate::event::ItemEvent;
use crate::pane::{Pane, Size};
use crate::transitions::TransitionConfig;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id() -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("item-{id}")
}

pub const FULLY_OPEN_DEGREE: f32 = 1.0;
pub const FULLY_CLOSED_DEGREE: f32 = 0.0;

/// Open/closed state of an item, always derived from the actual degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenState {
    FullyOpen,
    #[default]
    FullyClosed,
    PartiallyOpen,
}

impl OpenState {
    /// Exactly 0 is closed, exactly 1 is open, anything between is partial.
    pub fn of(degree: f32) -> Self {
        if degree == FULLY_CLOSED_DEGREE {
            OpenState::FullyClosed
        } else if degree == FULLY_OPEN_DEGREE {
            OpenState::FullyOpen
        } else {
            OpenState::PartiallyOpen
        }
    }
}

/// One collapsible row: a title band over a content band whose height is
/// scaled by the current degree open.
#[derive(Debug)]
pub struct Item {
    id: String,
    title: Box<dyn Pane>,
    content: Box<dyn Pane>,
    min_width: u16,
    actual_degree_open: f32,
    desired_degree_open: f32,
    open_state: OpenState,
    pub(crate) transition: Option<Animation>,
}

impl Item {
    pub fn new(title: impl Pane + 'static, content: impl Pane + 'static) -> Self {
        Self {
            id: generate_id(),
            title: Box::new(title),
            content: Box::new(content),
            min_width: 0,
            actual_degree_open: FULLY_CLOSED_DEGREE,
            desired_degree_open: FULLY_CLOSED_DEGREE,
            open_state: OpenState::FullyClosed,
            transition: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Lower bound on the measured width, independent of the panes.
    pub fn with_min_width(mut self, min_width: u16) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn min_width(&self) -> u16 {
        self.min_width
    }

    pub fn set_title_pane(&mut self, pane: impl Pane + 'static) {
        self.title = Box::new(pane);
    }

    pub fn set_content_pane(&mut self, pane: impl Pane + 'static) {
        self.content = Box::new(pane);
    }

    pub fn set_panes(&mut self, title: impl Pane + 'static, content: impl Pane + 'static) {
        self.set_title_pane(title);
        self.set_content_pane(content);
    }

    pub fn title_pane(&self) -> &dyn Pane {
        self.title.as_ref()
    }

    pub fn content_pane(&self) -> &dyn Pane {
        self.content.as_ref()
    }

    pub fn degree_open(&self) -> f32 {
        self.actual_degree_open
    }

    pub fn desired_degree_open(&self) -> f32 {
        self.desired_degree_open
    }

    pub fn open_state(&self) -> OpenState {
        self.open_state
    }

    pub fn is_fully_open(&self) -> bool {
        self.open_state == OpenState::FullyOpen
    }

    pub fn is_fully_closed(&self) -> bool {
        self.open_state == OpenState::FullyClosed
    }

    pub fn is_partially_open(&self) -> bool {
        self.open_state == OpenState::PartiallyOpen
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Measured size at the given available width: the widest band wins,
    /// and only the degree-scaled slice of the content contributes height.
    pub fn measure(&self, max_width: u16) -> Size {
        let title = self.title.measure(max_width);
        let content = self.content.measure(max_width);
        let width = title.width.max(content.width).max(self.min_width);
        let height = title
            .height
            .saturating_add(scaled_height(content.height, self.actual_degree_open));
        Size::new(width, height)
    }

    /// Commit a new actual degree and recompute the derived state, pushing
    /// the endpoint event (if any) onto `fired`. `Opened`/`Closed` fire only
    /// on the commit that lands exactly on 1 or 0 from some other state.
    pub(crate) fn set_actual_degree(&mut self, degree: f32, fired: &mut Vec<(String, ItemEvent)>) {
        let degree = degree.clamp(FULLY_CLOSED_DEGREE, FULLY_OPEN_DEGREE);
        self.actual_degree_open = degree;
        let next = OpenState::of(degree);
        match next {
            OpenState::FullyClosed if self.open_state != OpenState::FullyClosed => {
                log::debug!("[item] {} closed", self.id);
                fired.push((self.id.clone(), ItemEvent::Closed));
            }
            OpenState::FullyOpen if self.open_state != OpenState::FullyOpen => {
                log::debug!("[item] {} opened", self.id);
                fired.push((self.id.clone(), ItemEvent::Opened));
            }
            _ => {}
        }
        self.open_state = next;
    }

    pub(crate) fn set_desired_degree(&mut self, degree: f32) {
        self.desired_degree_open = degree.clamp(FULLY_CLOSED_DEGREE, FULLY_OPEN_DEGREE);
    }

    pub(crate) fn cancel_transition(&mut self) {
        self.transition = None;
    }

    /// Begin interpolating from the actual degree toward the desired one.
    /// Replaces any transition already in flight.
    pub(crate) fn start_transition(&mut self, config: TransitionConfig, now: Instant) {
        log::trace!(
            "[item] {} transition {} -> {} over {:?}",
            self.id,
            self.actual_degree_open,
            self.desired_degree_open,
            config.duration
        );
        self.transition = Some(Animation::new(
            self.actual_degree_open,
            self.desired_degree_open,
            now,
            config,
        ));
    }
}

/// Degree-scaled content height, truncated to whole cells.
pub fn scaled_height(content_height: u16, degree: f32) -> u16 {
    (content_height as f32 * degree.clamp(0.0, 1.0)) as u16
}
