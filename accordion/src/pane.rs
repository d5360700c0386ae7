use std::fmt;

use unicode_width::UnicodeWidthStr;

/// Measured extent of a pane, in integer cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// An externally supplied sub-view: the title or content of an item.
///
/// The accordion never renders panes; it only asks them to answer the
/// measure pass. `max_width` is the width the container can offer.
pub trait Pane: fmt::Debug {
    fn measure(&self, max_width: u16) -> Size;
}

/// A pane with an explicit, constant size.
#[derive(Debug, Clone, Copy)]
pub struct FixedPane {
    size: Size,
}

impl FixedPane {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }
}

impl Pane for FixedPane {
    fn measure(&self, _max_width: u16) -> Size {
        self.size
    }
}

/// A pane of unwrapped text, one cell row per line.
#[derive(Debug, Clone)]
pub struct TextPane {
    lines: Vec<String>,
}

impl TextPane {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Pane for TextPane {
    fn measure(&self, max_width: u16) -> Size {
        let width = self
            .lines
            .iter()
            .map(|line| line.width().min(u16::MAX as usize) as u16)
            .max()
            .unwrap_or(0)
            .min(max_width);
        let height = self.lines.len().min(u16::MAX as usize) as u16;
        Size::new(width, height)
    }
}
