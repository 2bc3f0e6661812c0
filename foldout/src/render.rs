use std::time::Instant;

use crate::buffer::{Buffer, Cell};
use crate::document::Document;
use crate::element::{Content, Element};
use crate::fade::FadeState;
use crate::layout::{layout, LayoutResult, Rect};
use crate::text::char_width;
use crate::types::{lerp_color, Color};

/// Render the visible tree into a fresh buffer, applying fade opacity.
///
/// Fading elements (and their subtrees) are blended toward `page_bg` in
/// OKLCH space: opacity 0 renders as the page background, opacity 1 at
/// full color. Also returns the layout so callers can hit-test clicks
/// against what was actually drawn.
pub fn render(
    doc: &Document,
    fades: &FadeState,
    now: Instant,
    width: u16,
    height: u16,
    page_bg: Color,
) -> (Buffer, LayoutResult) {
    let mut buffer = Buffer::new(width, height);
    let page_fg = Color::rgb(255, 255, 255);
    buffer.fill(
        Cell::new(' ')
            .with_fg(page_fg.to_rgb())
            .with_bg(page_bg.to_rgb()),
    );

    let result = layout(doc.root(), Rect::from_size(width, height));
    render_element(
        doc.root(),
        &result,
        fades,
        now,
        page_bg,
        page_fg,
        page_bg,
        1.0,
        &mut buffer,
    );

    (buffer, result)
}

#[allow(clippy::too_many_arguments)]
fn render_element(
    element: &Element,
    result: &LayoutResult,
    fades: &FadeState,
    now: Instant,
    page_bg: Color,
    inherited_fg: Color,
    inherited_bg: Color,
    inherited_opacity: f32,
    buffer: &mut Buffer,
) {
    if !element.effective_display().is_visible() {
        return;
    }
    let Some(rect) = result.get(&element.id) else {
        return;
    };

    let opacity = inherited_opacity * fades.opacity(&element.id, now).unwrap_or(1.0);
    let fg = element.style.foreground.unwrap_or(inherited_fg);
    let bg = element.style.background.unwrap_or(inherited_bg);
    let (draw_fg, draw_bg) = if opacity < 1.0 {
        (
            lerp_color(page_bg, fg, opacity),
            lerp_color(page_bg, bg, opacity),
        )
    } else {
        (fg, bg)
    };

    let blank = Cell::new(' ')
        .with_fg(draw_fg.to_rgb())
        .with_bg(draw_bg.to_rgb())
        .with_style(element.style.text_style);
    for y in rect.y..rect.bottom().min(buffer.height()) {
        for x in rect.x..rect.right().min(buffer.width()) {
            buffer.set(x, y, blank);
        }
    }

    match &element.content {
        Content::Text(text) => {
            draw_text(text, *rect, blank, buffer);
        }
        Content::Children(children) => {
            for child in children {
                render_element(
                    child, result, fades, now, page_bg, fg, bg, opacity, buffer,
                );
            }
        }
        Content::None => {}
    }
}

fn draw_text(text: &str, rect: Rect, template: Cell, buffer: &mut Buffer) {
    let mut x = rect.x;
    for ch in text.chars() {
        let width = char_width(ch) as u16;
        if width == 0 {
            continue;
        }
        if x + width > rect.right().min(buffer.width()) {
            break;
        }

        let mut cell = template;
        cell.ch = ch;
        buffer.set(x, rect.y, cell);

        // Mark continuation cells so the terminal writer skips them
        for offset in 1..width {
            let mut continuation = template;
            continuation.wide_continuation = true;
            buffer.set(x + offset, rect.y, continuation);
        }

        x += width;
    }
}
