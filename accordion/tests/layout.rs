use std::time::{Duration, Instant};

use accordion::{
    scaled_height, Accordion, Easing, FixedPane, Item, Pane, Rect, Size, TextPane,
};

// =============================================================================
// Test Fixtures
// =============================================================================

/// Title 10x1, content 10x4.
fn fixed_item(id: &str) -> Item {
    Item::new(FixedPane::new(10, 1), FixedPane::new(10, 4)).with_id(id)
}

fn tall_accordion() -> Accordion {
    let mut accordion = Accordion::new();
    accordion.set_open_transition_enabled(false);
    for id in ["a", "b", "c", "d"] {
        accordion.add(fixed_item(id));
    }
    accordion
}

const VIEWPORT: Rect = Rect::from_size(20, 3);

// =============================================================================
// Degree-Scaled Height
// =============================================================================

#[test]
fn test_scaled_height_truncates() {
    assert_eq!(scaled_height(10, 0.0), 0);
    assert_eq!(scaled_height(10, 1.0), 10);
    assert_eq!(scaled_height(10, 0.5), 5);
    // Truncation, not rounding
    assert_eq!(scaled_height(7, 0.5), 3);
    assert_eq!(scaled_height(10, 0.33), 3);
    assert_eq!(scaled_height(10, 0.99), 9);
}

#[test]
fn test_scaled_height_clamps_degree() {
    assert_eq!(scaled_height(10, 1.5), 10);
    assert_eq!(scaled_height(10, -0.5), 0);
}

// =============================================================================
// Pane Measurement
// =============================================================================

#[test]
fn test_fixed_pane_measure() {
    let pane = FixedPane::new(12, 5);
    assert_eq!(pane.measure(100), Size::new(12, 5));
}

#[test]
fn test_text_pane_measure() {
    let pane = TextPane::new("short\na longer line\nmid");
    let size = pane.measure(100);
    assert_eq!(size.height, 3);
    assert_eq!(size.width, 13);
}

#[test]
fn test_text_pane_measure_clamps_to_max_width() {
    let pane = TextPane::new("a very very long line indeed");
    assert_eq!(pane.measure(10).width, 10);
}

#[test]
fn test_text_pane_measure_wide_glyphs() {
    // CJK glyphs occupy two cells each
    let pane = TextPane::new("日本語");
    assert_eq!(pane.measure(100), Size::new(6, 1));
}

#[test]
fn test_empty_text_pane() {
    let pane = TextPane::new("");
    assert_eq!(pane.measure(100), Size::new(0, 0));
}

// =============================================================================
// Item Measurement
// =============================================================================

#[test]
fn test_item_measure_closed() {
    let item = Item::new(FixedPane::new(8, 2), FixedPane::new(12, 5));
    let size = item.measure(100);
    // Widest band wins; closed content contributes no height
    assert_eq!(size, Size::new(12, 2));
}

#[test]
fn test_item_measure_respects_min_width() {
    let item = Item::new(FixedPane::new(8, 2), FixedPane::new(12, 5)).with_min_width(20);
    assert_eq!(item.measure(100).width, 20);
}

#[test]
fn test_item_measure_tracks_degree() {
    let mut accordion = Accordion::new();
    accordion.add(Item::new(FixedPane::new(8, 2), FixedPane::new(12, 5)).with_id("a"));

    accordion.set_degree_open("a", 0.5, false);
    // 2 + trunc(5 * 0.5) = 2 + 2
    assert_eq!(accordion.item("a").unwrap().measure(100).height, 4);

    accordion.set_degree_open("a", 1.0, false);
    assert_eq!(accordion.item("a").unwrap().measure(100).height, 7);
}

// =============================================================================
// Container Layout
// =============================================================================

#[test]
fn test_layout_stacks_closed_items() {
    let mut accordion = tall_accordion();
    let layout = accordion.layout(VIEWPORT);

    assert_eq!(layout.items().len(), 4);
    assert_eq!(layout.item_top("a"), Some(0));
    assert_eq!(layout.item_top("b"), Some(1));
    assert_eq!(layout.item_top("c"), Some(2));
    assert_eq!(layout.item_top("d"), Some(3));
    assert_eq!(layout.content_height(), 4);
}

#[test]
fn test_layout_open_item_shifts_followers() {
    let mut accordion = tall_accordion();
    accordion.open_item("b");
    let layout = accordion.layout(VIEWPORT);

    assert_eq!(layout.item_top("a"), Some(0));
    assert_eq!(layout.item_top("b"), Some(1));
    // b is title 1 + content 4 tall
    assert_eq!(layout.item_top("c"), Some(6));
    assert_eq!(layout.content_height(), 9);
}

#[test]
fn test_layout_bands() {
    let mut accordion = tall_accordion();
    accordion.open_item("a");
    let layout = accordion.layout(VIEWPORT);

    let row = layout.get("a").unwrap();
    assert_eq!(row.title, Rect::new(0, 0, 20, 1));
    assert_eq!(row.content, Rect::new(0, 1, 20, 4));
    assert_eq!(row.rect, Rect::new(0, 0, 20, 5));
}

#[test]
fn test_layout_partial_degree_band() {
    let mut accordion = tall_accordion();
    accordion.set_degree_open("a", 0.5, false);
    let layout = accordion.layout(VIEWPORT);

    let row = layout.get("a").unwrap();
    assert_eq!(row.content.height, 2);
    assert_eq!(row.rect.height, 3);
}

#[test]
fn test_layout_row_width_respects_min_width() {
    let mut accordion = Accordion::new();
    accordion.set_open_transition_enabled(false);
    accordion.set_scroll_to_top_on_open(false);
    accordion.add(fixed_item("narrow"));
    accordion.add(fixed_item("wide").with_min_width(30));
    accordion.open_item("wide");
    let layout = accordion.layout(VIEWPORT);

    // Rows fill the viewport but widen when an item demands more
    assert_eq!(layout.get("narrow").unwrap().rect.width, 20);
    let wide = layout.get("wide").unwrap();
    assert_eq!(wide.rect.width, 30);
    assert_eq!(wide.title.width, 30);
    assert_eq!(wide.content.width, 30);
    assert_eq!(layout.hit_title(25, 1), Some("wide"));
}

#[test]
fn test_needs_layout_after_mutation() {
    let mut accordion = tall_accordion();
    accordion.layout(VIEWPORT);
    assert!(!accordion.needs_layout());

    accordion.open_item("a");
    assert!(accordion.needs_layout());

    accordion.layout(VIEWPORT);
    assert!(!accordion.needs_layout());
}

#[test]
fn test_max_scroll_and_offset_clamp() {
    let mut accordion = tall_accordion();
    accordion.open_item("a");
    let layout = accordion.layout(VIEWPORT);
    // content 4 + 4 = 8, viewport 3
    assert_eq!(layout.max_scroll(), 5);

    accordion.set_scroll_offset(100);
    assert_eq!(accordion.scroll_offset(), 5);
}

#[test]
fn test_layout_clamps_stale_offset() {
    let mut accordion = tall_accordion();
    accordion.set_scroll_to_top_on_open(false);
    accordion.open_item("a");
    accordion.layout(VIEWPORT);
    accordion.set_scroll_offset(5);

    // Collapsing the item shrinks the content; the next layout reins the
    // offset back into range
    accordion.close_item("a");
    accordion.layout(VIEWPORT);
    assert_eq!(accordion.scroll_offset(), 1);
}

// =============================================================================
// Title Hit Testing and Taps
// =============================================================================

#[test]
fn test_hit_title() {
    let mut accordion = tall_accordion();
    accordion.open_item("a");
    let layout = accordion.layout(VIEWPORT);

    assert_eq!(layout.hit_title(0, 0), Some("a"));
    // Inside a's content band, not a title
    assert_eq!(layout.hit_title(0, 2), None);
    assert_eq!(layout.hit_title(0, 5), Some("b"));
    // Past the last item
    assert_eq!(layout.hit_title(0, 50), None);
    // Right of the viewport width
    assert_eq!(layout.hit_title(25, 0), None);
}

#[test]
fn test_tap_on_title_toggles() {
    let mut accordion = tall_accordion();
    accordion.set_scroll_to_top_on_open(false);
    accordion.layout(VIEWPORT);

    accordion.tap(0, 1);
    assert!(accordion.item("b").unwrap().is_fully_open());

    accordion.layout(VIEWPORT);
    accordion.tap(0, 1);
    assert!(accordion.item("b").unwrap().is_fully_closed());
}

#[test]
fn test_tap_on_content_is_ignored() {
    let mut accordion = tall_accordion();
    accordion.set_scroll_to_top_on_open(false);
    accordion.open_item("a");
    accordion.layout(VIEWPORT);

    accordion.tap(0, 2);

    assert!(accordion.item("a").unwrap().is_fully_open());
    assert!(accordion.item("b").unwrap().is_fully_closed());
}

#[test]
fn test_tap_respects_scroll_offset() {
    let mut accordion = tall_accordion();
    accordion.set_scroll_to_top_on_open(false);
    // Short viewport so content row 2 is scrollable into view
    accordion.layout(Rect::from_size(20, 2));
    accordion.set_scroll_offset(2);

    // Viewport row 0 shows content row 2, which is c's title
    accordion.tap(0, 0);
    assert!(accordion.item("c").unwrap().is_fully_open());
}

// =============================================================================
// Scroll-To-Item
// =============================================================================

#[test]
fn test_scroll_jump_resolved_on_next_layout() {
    let mut accordion = tall_accordion();
    accordion.set_scroll_animation_enabled(false);
    accordion.layout(VIEWPORT);

    accordion.open_item("c");
    // The jump waits for the layout pass that resolves c's final position
    assert_eq!(accordion.scroll_offset(), 0);

    accordion.layout(VIEWPORT);
    // c's top is 2, within the scroll range of content 8 / viewport 3
    assert_eq!(accordion.scroll_offset(), 2);
}

#[test]
fn test_scroll_jump_clamped_to_range() {
    let mut accordion = tall_accordion();
    accordion.set_scroll_animation_enabled(false);
    accordion.layout(VIEWPORT);

    accordion.open_item("d");
    accordion.layout(VIEWPORT);

    // d's top (3) exceeds nothing here, but never past max_scroll
    let layout = accordion.last_layout();
    assert!(accordion.scroll_offset() <= layout.max_scroll());
    assert_eq!(accordion.scroll_offset(), 3);
}

#[test]
fn test_no_scroll_when_disabled() {
    let mut accordion = tall_accordion();
    accordion.set_scroll_to_top_on_open(false);
    accordion.layout(VIEWPORT);

    accordion.open_item("c");
    accordion.layout(VIEWPORT);

    assert_eq!(accordion.scroll_offset(), 0);
    assert!(!accordion.has_active_animations());
}

#[test]
fn test_scroll_animation_reaches_item_top() {
    let mut accordion = tall_accordion();
    accordion.set_scroll_animation_duration(Duration::from_secs(10));
    accordion.layout(VIEWPORT);

    accordion.open_item("c");
    assert!(accordion.has_active_animations());
    accordion.layout(VIEWPORT);

    accordion.tick(Instant::now() + Duration::from_secs(11));
    assert_eq!(accordion.scroll_offset(), 2);
    assert!(!accordion.has_active_animations());
}

#[test]
fn test_scroll_animation_interpolates() {
    let mut accordion = tall_accordion();
    accordion.set_scroll_animation_duration(Duration::from_secs(10));
    accordion.set_scroll_easing(Easing::Linear);
    // Open d so the content is tall enough to scroll to offset 5
    accordion.open_item("d");
    accordion.layout(VIEWPORT);
    accordion.set_scroll_offset(5);

    // Scroll back up to a (top 0) from offset 5
    accordion.open_item("a");
    accordion.layout(VIEWPORT);

    accordion.tick(Instant::now() + Duration::from_secs(5));
    let mid = accordion.scroll_offset();
    assert!(mid > 0 && mid < 5, "expected mid-flight offset, got {mid}");

    accordion.tick(Instant::now() + Duration::from_secs(11));
    assert_eq!(accordion.scroll_offset(), 0);
}

#[test]
fn test_removing_scroll_target_stops_animation() {
    let mut accordion = tall_accordion();
    accordion.set_scroll_animation_duration(Duration::from_millis(100));
    accordion.layout(VIEWPORT);

    accordion.open_item("d");
    accordion.layout(VIEWPORT);
    assert!(accordion.has_active_animations());

    accordion.remove_item("d");
    assert!(!accordion.has_active_animations());

    // Ticking afterwards must not revive or strand the animation
    accordion.tick(Instant::now() + Duration::from_secs(5));
    accordion.layout(VIEWPORT);
    assert!(!accordion.has_active_animations());
}

#[test]
fn test_remove_all_items_stops_scroll_animation() {
    let mut accordion = tall_accordion();
    accordion.set_scroll_animation_duration(Duration::from_millis(100));
    accordion.layout(VIEWPORT);

    accordion.open_item("c");
    accordion.layout(VIEWPORT);
    assert!(accordion.has_active_animations());

    accordion.remove_all_items();
    accordion.tick(Instant::now() + Duration::from_secs(5));
    assert!(!accordion.has_active_animations());
}

#[test]
fn test_new_open_cancels_scroll_animation() {
    let mut accordion = tall_accordion();
    accordion.set_scroll_animation_duration(Duration::from_secs(10));
    accordion.layout(VIEWPORT);

    accordion.open_item("d");
    accordion.layout(VIEWPORT);
    accordion.tick(Instant::now() + Duration::from_secs(2));

    // Opening another item restarts the scroll from wherever it got to
    accordion.open_item("a");
    accordion.layout(VIEWPORT);
    accordion.tick(Instant::now() + Duration::from_secs(22));

    assert_eq!(accordion.scroll_offset(), 0);
    assert!(!accordion.has_active_animations());
}
