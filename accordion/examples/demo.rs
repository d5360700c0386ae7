use std::fs::File;
use std::thread;
use std::time::{Duration, Instant};

use accordion::{Accordion, Item, Rect, TextPane};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut accordion = Accordion::new();
    accordion.set_allow_multiple_open(false);
    accordion.set_open_transition_duration(Duration::from_millis(400));
    accordion.set_scroll_animation_duration(Duration::from_millis(400));

    for (title, body) in [
        ("first", "alpha\nbravo\ncharlie\ndelta"),
        ("second", "echo\nfoxtrot\ngolf"),
        ("third", "hotel\nindia\njuliett\nkilo\nlima"),
    ] {
        accordion.add(Item::new(TextPane::new(title), TextPane::new(body)).with_id(title));
    }

    let viewport = Rect::from_size(40, 6);
    accordion.layout(viewport);

    for id in ["first", "third", "second"] {
        println!("opening {id:?}");
        accordion.open_item(id);
        while accordion.has_active_animations() {
            accordion.tick(Instant::now());
            if accordion.needs_layout() {
                accordion.layout(viewport);
            }
            thread::sleep(Duration::from_millis(16));
        }
        let layout = accordion.layout(viewport);
        for row in layout.items() {
            println!(
                "  {:<8} y={:<3} title_h={} content_h={}",
                row.id, row.rect.y, row.title.height, row.content.height
            );
        }
        println!(
            "  content height {} / scroll offset {}",
            layout.content_height(),
            accordion.scroll_offset()
        );
    }

    Ok(())
}
