pub mod accordion;
pub mod animation;
pub mod event;
pub mod item;
pub mod layout;
pub mod pane;
pub mod scroll;
pub mod transitions;

pub use accordion::Accordion;
pub use animation::Animation;
pub use event::{ItemEvent, OnAccordionEvent};
pub use item::{scaled_height, Item, OpenState};
pub use layout::{AccordionLayout, ItemLayout, Rect};
pub use pane::{FixedPane, Pane, Size, TextPane};
pub use scroll::{ScrollAnimation, ScrollState};
pub use transitions::{Easing, TransitionConfig};
