use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::Display;

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

pub type LayoutResult = HashMap<String, Rect>;

/// Lay out the visible tree within `available`.
///
/// `Block` elements stack vertically at full width, `Flex` elements lay
/// their children out in a single row at measured width. Elements whose
/// effective display is `None` get no rect, and neither does their subtree.
pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(root, available, &mut result);
    result
}

fn layout_element(element: &Element, available: Rect, result: &mut LayoutResult) -> u16 {
    if !element.effective_display().is_visible() || available.is_empty() {
        return 0;
    }

    let height = match (&element.content, element.effective_display()) {
        (Content::Text(_), _) => 1,
        (Content::Children(children), Display::Flex) => {
            let mut x = available.x;
            let mut row_height = 1;
            for child in children {
                if !child.effective_display().is_visible() {
                    continue;
                }
                let width = measure_width(child).min(available.right().saturating_sub(x));
                if width == 0 {
                    continue;
                }
                let child_available = Rect::new(x, available.y, width, available.height);
                let child_height = layout_element(child, child_available, result);
                row_height = row_height.max(child_height);
                x += width;
                if x >= available.right() {
                    break;
                }
            }
            row_height
        }
        (Content::Children(children), _) => {
            let mut y = available.y;
            for child in children {
                let remaining = available.bottom().saturating_sub(y);
                let child_available = Rect::new(available.x, y, available.width, remaining);
                y += layout_element(child, child_available, result);
                if y >= available.bottom() {
                    break;
                }
            }
            y - available.y
        }
        (Content::None, _) => 1,
    };

    result.insert(
        element.id.clone(),
        Rect::new(available.x, available.y, available.width, height),
    );
    height
}

fn measure_width(element: &Element) -> u16 {
    match &element.content {
        Content::Text(text) => display_width(text) as u16,
        Content::Children(children) => children
            .iter()
            .filter(|child| child.effective_display().is_visible())
            .map(measure_width)
            .sum(),
        Content::None => 0,
    }
}
