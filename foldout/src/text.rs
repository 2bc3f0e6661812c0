use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal column width of a string.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Terminal column width of a single character.
pub fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}
