use crate::item::{scaled_height, Item};

/// Axis-aligned cell rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Resolved geometry for one item: the full row plus its two bands.
#[derive(Debug, Clone)]
pub struct ItemLayout {
    pub id: String,
    pub rect: Rect,
    pub title: Rect,
    pub content: Rect,
}

/// Result of a layout pass, in content coordinates: y = 0 is the top of the
/// first item, independent of the scroll offset.
#[derive(Debug, Clone, Default)]
pub struct AccordionLayout {
    items: Vec<ItemLayout>,
    content_height: u16,
    viewport: Rect,
}

impl AccordionLayout {
    /// Stack the items vertically. Rows fill the viewport width, widening
    /// past it when an item's measured width demands more. The title band
    /// sits at its measured height; the content band directly beneath it,
    /// sized by the item's current degree open.
    pub(crate) fn compute(items: &[Item], viewport: Rect) -> Self {
        let width = viewport.width;
        let mut rows = Vec::with_capacity(items.len());
        let mut y = 0u16;
        for item in items {
            let row_width = width.max(item.measure(width).width);
            let title_height = item.title_pane().measure(width).height;
            let content_height =
                scaled_height(item.content_pane().measure(width).height, item.degree_open());
            let title = Rect::new(0, y, row_width, title_height);
            let content = Rect::new(0, y.saturating_add(title_height), row_width, content_height);
            let rect = Rect::new(0, y, row_width, title_height.saturating_add(content_height));
            rows.push(ItemLayout {
                id: item.id().to_string(),
                rect,
                title,
                content,
            });
            y = y.saturating_add(rect.height);
        }
        Self {
            items: rows,
            content_height: y,
            viewport,
        }
    }

    pub fn items(&self) -> &[ItemLayout] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&ItemLayout> {
        self.items.iter().find(|row| row.id == id)
    }

    pub fn item_top(&self, id: &str) -> Option<u16> {
        self.get(id).map(|row| row.rect.y)
    }

    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Largest valid scroll offset for this layout.
    pub fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport.height)
    }

    /// Id of the item whose title band contains the point, if any.
    /// Coordinates are in content space.
    pub fn hit_title(&self, x: u16, y: u16) -> Option<&str> {
        self.items
            .iter()
            .find(|row| row.title.contains(x, y))
            .map(|row| row.id.as_str())
    }
}
