use std::time::{Duration, Instant};

use crate::event::{ItemEvent, OnAccordionEvent};
use crate::item::{Item, OpenState};
use crate::layout::{AccordionLayout, Rect};
use crate::pane::Pane;
use crate::scroll::ScrollState;
use crate::transitions::{Easing, TransitionConfig};

/// A scrollable stack of collapsible items.
///
/// The container owns its items, tracks the active one, enforces the
/// exclusive-open policy, and drives both kinds of animation from `tick`.
/// All mutation happens through `&mut self` on the UI thread; the embedder
/// calls `tick(now)` once per frame and `layout(viewport)` whenever
/// `needs_layout` reports a pending reflow.
pub struct Accordion {
    items: Vec<Item>,
    active_item: Option<String>,
    allow_multiple_open: bool,
    scroll_to_top_on_open: bool,
    scroll_animation_enabled: bool,
    open_transition_enabled: bool,
    open_transition: TransitionConfig,
    scroll_animation: TransitionConfig,
    scroll: ScrollState,
    listener: Option<Box<dyn OnAccordionEvent>>,
    pending: Vec<(String, ItemEvent)>,
    layout: AccordionLayout,
    layout_dirty: bool,
}

impl Default for Accordion {
    fn default() -> Self {
        Self::new()
    }
}

impl Accordion {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            active_item: None,
            allow_multiple_open: true,
            scroll_to_top_on_open: true,
            scroll_animation_enabled: true,
            open_transition_enabled: true,
            open_transition: TransitionConfig::default(),
            scroll_animation: TransitionConfig::default(),
            scroll: ScrollState::new(),
            listener: None,
            pending: Vec::new(),
            layout: AccordionLayout::default(),
            layout_dirty: true,
        }
    }

    // ---- items ----

    /// Construct an item from the two panes, attach it, and return a
    /// reference to it.
    pub fn add_item(&mut self, title: impl Pane + 'static, content: impl Pane + 'static) -> &Item {
        self.add(Item::new(title, content))
    }

    /// Attach an already constructed item and return a reference to it.
    pub fn add(&mut self, item: Item) -> &Item {
        self.layout_dirty = true;
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// Detach an item by id. Unknown ids are silently ignored.
    pub fn remove_item(&mut self, id: &str) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        self.items.remove(index);
        if self.active_item.as_deref() == Some(id) {
            self.active_item = None;
            self.scroll.cancel();
        }
        self.layout_dirty = true;
    }

    pub fn remove_all_items(&mut self) {
        self.items.clear();
        self.active_item = None;
        self.scroll.cancel();
        self.layout_dirty = true;
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item most recently commanded to open, if still attached.
    pub fn active_item(&self) -> Option<&str> {
        self.active_item.as_deref()
    }

    // ---- configuration ----

    pub fn allow_multiple_open(&self) -> bool {
        self.allow_multiple_open
    }

    pub fn set_allow_multiple_open(&mut self, allow: bool) {
        self.allow_multiple_open = allow;
    }

    pub fn scroll_to_top_on_open(&self) -> bool {
        self.scroll_to_top_on_open
    }

    pub fn set_scroll_to_top_on_open(&mut self, scroll: bool) {
        self.scroll_to_top_on_open = scroll;
    }

    pub fn scroll_animation_enabled(&self) -> bool {
        self.scroll_animation_enabled
    }

    pub fn set_scroll_animation_enabled(&mut self, enabled: bool) {
        self.scroll_animation_enabled = enabled;
    }

    pub fn open_transition_enabled(&self) -> bool {
        self.open_transition_enabled
    }

    pub fn set_open_transition_enabled(&mut self, enabled: bool) {
        self.open_transition_enabled = enabled;
    }

    pub fn open_transition_duration(&self) -> Duration {
        self.open_transition.duration
    }

    pub fn set_open_transition_duration(&mut self, duration: Duration) {
        self.open_transition.duration = duration;
    }

    pub fn open_transition_easing(&self) -> Easing {
        self.open_transition.easing
    }

    pub fn set_open_transition_easing(&mut self, easing: Easing) {
        self.open_transition.easing = easing;
    }

    pub fn scroll_animation_duration(&self) -> Duration {
        self.scroll_animation.duration
    }

    pub fn set_scroll_animation_duration(&mut self, duration: Duration) {
        self.scroll_animation.duration = duration;
    }

    pub fn scroll_easing(&self) -> Easing {
        self.scroll_animation.easing
    }

    pub fn set_scroll_easing(&mut self, easing: Easing) {
        self.scroll_animation.easing = easing;
    }

    /// Register the external listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: Box<dyn OnAccordionEvent>) {
        self.listener = Some(listener);
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    // ---- open / close ----

    pub fn open_item(&mut self, id: &str) {
        self.open_item_with(id, self.open_transition_enabled);
    }

    pub fn open_item_with(&mut self, id: &str, animate: bool) {
        self.set_degree_open(id, 1.0, animate);
    }

    pub fn close_item(&mut self, id: &str) {
        self.close_item_with(id, self.open_transition_enabled);
    }

    pub fn close_item_with(&mut self, id: &str, animate: bool) {
        self.set_degree_open(id, 0.0, animate);
    }

    /// Toggle between fully open and fully closed. A partially open item is
    /// mid-transition and the toggle is ignored.
    pub fn toggle_item(&mut self, id: &str) {
        self.toggle_item_with(id, self.open_transition_enabled);
    }

    pub fn toggle_item_with(&mut self, id: &str, animate: bool) {
        let Some(state) = self.item(id).map(Item::open_state) else {
            return;
        };
        match state {
            OpenState::FullyOpen => self.close_item_with(id, animate),
            OpenState::FullyClosed => self.open_item_with(id, animate),
            OpenState::PartiallyOpen => {}
        }
    }

    /// Close every attached item through its own close path.
    pub fn close_all_items(&mut self) {
        let animate = self.open_transition_enabled;
        let now = Instant::now();
        for index in 0..self.items.len() {
            self.apply_degree(index, 0.0, animate, now);
        }
        self.flush_events();
    }

    /// Set an item's desired degree, firing start events, applying the
    /// container policy, and starting (or skipping) the transition.
    pub fn set_degree_open(&mut self, id: &str, degree: f32, animate: bool) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        self.apply_degree(index, degree, animate, Instant::now());
        self.flush_events();
    }

    /// Route a tap at viewport coordinates: a hit on a title band toggles
    /// that item.
    pub fn tap(&mut self, x: u16, y: u16) {
        let content_y = y.saturating_add(self.scroll.offset());
        let Some(id) = self.layout.hit_title(x, content_y).map(str::to_string) else {
            return;
        };
        log::debug!("[accordion] tap on title of {id}");
        self.toggle_item(&id);
    }

    // ---- frame driving ----

    /// Advance all animations. Call once per frame with a monotonic clock.
    pub fn tick(&mut self, now: Instant) {
        self.tick_items(now);
        self.tick_scroll(now);
        self.flush_events();
    }

    pub fn has_active_animations(&self) -> bool {
        self.scroll.is_animating() || self.items.iter().any(Item::is_animating)
    }

    /// True when item geometry changed since the last `layout` call.
    pub fn needs_layout(&self) -> bool {
        self.layout_dirty
    }

    /// Run the measure/layout pass for the given viewport and return the
    /// resolved geometry. Resolves any pending scroll jump and clamps the
    /// offset against the new content height.
    pub fn layout(&mut self, viewport: Rect) -> &AccordionLayout {
        self.layout = AccordionLayout::compute(&self.items, viewport);
        let target = self.scroll_target();
        self.scroll.after_layout(target, self.layout.max_scroll());
        self.layout_dirty = false;
        &self.layout
    }

    /// Geometry from the most recent `layout` call.
    pub fn last_layout(&self) -> &AccordionLayout {
        &self.layout
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll.offset()
    }

    /// Jump the viewport to an offset, cancelling any scroll animation.
    pub fn set_scroll_offset(&mut self, offset: u16) {
        self.scroll.set_offset(offset.min(self.layout.max_scroll()));
    }

    // ---- internals ----

    fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn apply_degree(&mut self, index: usize, degree: f32, animate: bool, now: Instant) {
        let degree = degree.clamp(0.0, 1.0);
        let id = self.items[index].id().to_string();

        self.items[index].set_desired_degree(degree);

        if degree == 0.0 && !self.items[index].is_fully_closed() {
            log::debug!("[accordion] start close {id}");
            self.pending.push((id.clone(), ItemEvent::StartClose));
        }
        if degree == 1.0 && !self.items[index].is_fully_open() {
            log::debug!("[accordion] start open {id}");
            self.activate(index, now);
            self.pending.push((id, ItemEvent::StartOpen));
        }

        self.items[index].cancel_transition();

        if animate && self.open_transition_enabled {
            self.items[index].start_transition(self.open_transition, now);
        } else {
            self.items[index].set_actual_degree(degree, &mut self.pending);
            self.layout_dirty = true;
        }
    }

    /// Make the item at `index` the active one: enforce the exclusive-open
    /// policy, cancel any in-flight scroll, and aim the viewport at it.
    fn activate(&mut self, index: usize, now: Instant) {
        self.active_item = Some(self.items[index].id().to_string());
        if !self.allow_multiple_open {
            self.close_others(index, now);
        }
        self.scroll.cancel();
        if self.scroll_to_top_on_open {
            if self.scroll_animation_enabled {
                log::debug!(
                    "[scroll] animating to active item from offset {}",
                    self.scroll.offset()
                );
                self.scroll.animate_to_item(now, self.scroll_animation);
            } else {
                self.scroll.schedule_jump();
            }
        }
    }

    fn close_others(&mut self, active_index: usize, now: Instant) {
        let animate = self.open_transition_enabled;
        for index in 0..self.items.len() {
            if index != active_index {
                self.apply_degree(index, 0.0, animate, now);
            }
        }
    }

    fn tick_items(&mut self, now: Instant) {
        for index in 0..self.items.len() {
            let Some(animation) = self.items[index].transition else {
                continue;
            };
            let value = animation.value_at(now);
            self.items[index].set_actual_degree(value, &mut self.pending);
            self.layout_dirty = true;
            if animation.is_complete(now) {
                self.items[index].cancel_transition();
            }
        }
    }

    fn tick_scroll(&mut self, now: Instant) {
        if !self.scroll.is_animating() {
            return;
        }
        let Some(target) = self.scroll_target() else {
            // The active item is gone; nothing left to scroll to
            self.scroll.cancel();
            return;
        };
        self.scroll.tick(now, target);
    }

    /// Top of the active item in the last layout, clamped to the scrollable
    /// range. None when there is nothing to scroll to.
    fn scroll_target(&self) -> Option<u16> {
        let id = self.active_item.as_deref()?;
        let top = self.layout.item_top(id)?;
        Some(top.min(self.layout.max_scroll()))
    }

    /// Deliver buffered events to the listener in firing order. Events for
    /// items detached before delivery are dropped.
    fn flush_events(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.pending);
        let Some(listener) = self.listener.as_mut() else {
            return;
        };
        for (id, event) in pending {
            let Some(item) = self.items.iter().find(|item| item.id() == id) else {
                continue;
            };
            match event {
                ItemEvent::StartOpen => listener.on_item_start_open(item),
                ItemEvent::StartClose => listener.on_item_start_close(item),
                ItemEvent::Opened => listener.on_item_opened(item),
                ItemEvent::Closed => listener.on_item_closed(item),
            }
        }
    }
}
