use std::fs::File;
use std::time::{Duration, Instant};

use crossterm::event::{Event as CtEvent, KeyCode, KeyEventKind};
use simplelog::{Config, LevelFilter, WriteLogger};

use foldout::{
    render, translate_events, Color, Document, Element, Menu, MenuConfig, Style, Terminal,
    DEFAULT_BACKDROP_ID, DEFAULT_TRIGGER_ID,
};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("menu.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut doc = Document::new(ui());
    let mut menu =
        Menu::initialize(&doc, MenuConfig::default()).expect("menu elements missing from tree");

    let mut term = Terminal::new()?;
    let page_bg = Color::oklch(0.18, 0.02, 250.0);

    loop {
        let now = Instant::now();
        menu.update(&mut doc, now);

        let (width, height) = term.size()?;
        let (buffer, layout) = render(&doc, menu.fades(), now, width, height, page_bg);
        term.draw(&buffer)?;

        let raw_events = term.poll(Some(Duration::from_millis(33)))?;

        for event in &raw_events {
            if let CtEvent::Key(key_event) = event {
                if key_event.kind == KeyEventKind::Press {
                    match key_event.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('m') => {
                            menu.toggle(&mut doc, now).expect("menu trigger vanished");
                        }
                        _ => {}
                    }
                }
            }
        }

        for event in translate_events(&raw_events, doc.root(), &layout) {
            menu.handle_event(&mut doc, &event, now)
                .expect("menu trigger vanished");
        }
    }
}

fn ui() -> Element {
    Element::box_()
        .id("root")
        .child(header())
        .child(nav_panel())
        .child(content())
        .child(backdrop())
}

fn header() -> Element {
    Element::row()
        .id("header")
        .style(Style::new().background(Color::oklch(0.3, 0.06, 250.0)))
        .child(
            Element::text(" ☰ Menu ")
                .id(DEFAULT_TRIGGER_ID)
                .clickable(true)
                .style(
                    Style::new()
                        .background(Color::oklch(0.55, 0.15, 250.0))
                        .bold(),
                ),
        )
        .child(Element::text("  Foldout demo: press m or click the button, q quits"))
}

fn nav_panel() -> Element {
    Element::box_()
        .id("nav")
        .hidden()
        .data("displayed", "false")
        .style(
            Style::new()
                .background(Color::oklch(0.28, 0.05, 290.0))
                .foreground(Color::oklch(0.92, 0.03, 290.0)),
        )
        .child(Element::text("  Home").id("nav-home"))
        .child(Element::text("  Projects").id("nav-projects"))
        .child(Element::text("  About").id("nav-about"))
        .child(Element::text("  Contact").id("nav-contact"))
}

fn content() -> Element {
    Element::box_()
        .id("content")
        .data("displayed", "true")
        .child(Element::text(""))
        .child(Element::text("  Welcome!").style(Style::new().bold()))
        .child(Element::text("  This content fades out while the menu is open."))
        .child(Element::text("  Clicking the backdrop below the menu closes it again."))
}

fn backdrop() -> Element {
    Element::box_()
        .id(DEFAULT_BACKDROP_ID)
        .clickable(true)
        .hidden()
        .data("displayed", "false")
        .style(Style::new().foreground(Color::oklch(0.5, 0.02, 250.0)))
        .child(Element::text(""))
        .child(Element::text("  · · · click here to close the menu · · ·"))
}
