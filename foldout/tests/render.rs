use std::time::{Duration, Instant};

use foldout::{render, Color, Document, Easing, Element, FadeState, Rgb, Style};

const PAGE_BG: Color = Color::Rgb { r: 0, g: 0, b: 0 };

fn doc_with(root: Element) -> Document {
    Document::new(root)
}

// ============================================================================
// Basic Rendering
// ============================================================================

#[test]
fn test_text_is_drawn() {
    let doc = doc_with(
        Element::box_()
            .id("root")
            .child(Element::text("hi").id("greeting")),
    );
    let fades = FadeState::new();

    let (buffer, _) = render(&doc, &fades, Instant::now(), 10, 3, PAGE_BG);

    assert_eq!(buffer.get(0, 0).unwrap().ch, 'h');
    assert_eq!(buffer.get(1, 0).unwrap().ch, 'i');
    assert_eq!(buffer.get(2, 0).unwrap().ch, ' ');
}

#[test]
fn test_styles_are_applied() {
    let doc = doc_with(
        Element::box_().id("root").child(
            Element::text("x")
                .id("styled")
                .style(Style::new().foreground(Color::rgb(255, 0, 0)).bold()),
        ),
    );
    let fades = FadeState::new();

    let (buffer, _) = render(&doc, &fades, Instant::now(), 10, 3, PAGE_BG);

    let cell = buffer.get(0, 0).unwrap();
    assert_eq!(cell.fg, Rgb::new(255, 0, 0));
    assert!(cell.style.bold);
}

#[test]
fn test_hidden_element_not_drawn() {
    let doc = doc_with(
        Element::box_()
            .id("root")
            .child(Element::text("secret").id("nav").hidden())
            .child(Element::text("shown").id("body")),
    );
    let fades = FadeState::new();

    let (buffer, result) = render(&doc, &fades, Instant::now(), 10, 3, PAGE_BG);

    // The hidden element left no rect and its sibling took row 0
    assert!(!result.contains_key("nav"));
    assert_eq!(buffer.get(0, 0).unwrap().ch, 's');
    assert_eq!(buffer.get(1, 0).unwrap().ch, 'h');
}

#[test]
fn test_layout_is_returned_for_hit_testing() {
    let doc = doc_with(
        Element::box_()
            .id("root")
            .child(Element::text("click").id("btn").clickable(true)),
    );
    let fades = FadeState::new();

    let (_, result) = render(&doc, &fades, Instant::now(), 10, 3, PAGE_BG);

    assert!(result.contains_key("btn"));
    assert_eq!(result["btn"].y, 0);
}

// ============================================================================
// Fade Blending
// ============================================================================

#[test]
fn test_fading_element_is_blended() {
    let red = Color::rgb(255, 0, 0);
    let mut doc = doc_with(
        Element::box_().id("root").child(
            Element::text("x")
                .id("body")
                .style(Style::new().foreground(red)),
        ),
    );
    let mut fades = FadeState::with_easing(Easing::Linear);
    let t0 = Instant::now();
    fades.fade_out(&mut doc, "body", Duration::from_millis(400), t0);

    // At full opacity the exact foreground is used
    let (buffer, _) = render(&doc, &fades, t0, 10, 3, PAGE_BG);
    assert_eq!(buffer.get(0, 0).unwrap().fg, Rgb::new(255, 0, 0));

    // Halfway through, the color sits between foreground and page background
    let (buffer, _) = render(&doc, &fades, t0 + Duration::from_millis(200), 10, 3, PAGE_BG);
    let mid = buffer.get(0, 0).unwrap().fg;
    assert_ne!(mid, Rgb::new(255, 0, 0));
    assert_ne!(mid, Rgb::new(0, 0, 0));
}

#[test]
fn test_fade_applies_to_subtree() {
    let mut doc = doc_with(
        Element::box_().id("root").child(
            Element::box_().id("nav").child(
                Element::text("x")
                    .id("link")
                    .style(Style::new().foreground(Color::rgb(0, 255, 0))),
            ),
        ),
    );
    let mut fades = FadeState::with_easing(Easing::Linear);
    let t0 = Instant::now();
    fades.fade_out(&mut doc, "nav", Duration::from_millis(400), t0);

    let (buffer, _) = render(&doc, &fades, t0 + Duration::from_millis(200), 10, 3, PAGE_BG);

    // The child inherits the parent's fade even though it fades nothing itself
    let cell = buffer.get(0, 0).unwrap();
    assert_ne!(cell.fg, Rgb::new(0, 255, 0));
}
