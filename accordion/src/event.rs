use crate::item::Item;

/// Lifecycle events emitted as an item's degree crosses the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEvent {
    /// The item was commanded fully open. Fires before any animation runs.
    StartOpen,
    /// The item was commanded fully closed. Fires before any animation runs.
    StartClose,
    /// The actual degree reached exactly 1 from some other value.
    Opened,
    /// The actual degree reached exactly 0 from some other value.
    Closed,
}

/// External observer for item lifecycle events.
///
/// The container holds a single listener slot; registering a new listener
/// replaces the previous one. Single-observer, not a broadcast.
pub trait OnAccordionEvent {
    fn on_item_start_open(&mut self, _item: &Item) {}
    fn on_item_start_close(&mut self, _item: &Item) {}
    fn on_item_opened(&mut self, _item: &Item) {}
    fn on_item_closed(&mut self, _item: &Item) {}
}
