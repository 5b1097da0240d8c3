//! Greedy, measurement-driven line wrapping.

use crate::font::FontHandle;
use crate::model::LayoutLine;

/// Wrap one logical line to `max_width`.
///
/// Words are taken in order and appended to the current line while the
/// measured width still fits; otherwise the current line is flushed and the
/// word starts a new one. A word wider than `max_width` is placed alone on
/// its own line and allowed to overflow. No hyphenation, no justification.
///
/// `measure` returns the rendered width of a string, with the font and size
/// already bound by the caller.
pub fn wrap_line<F>(line: &str, max_width: f32, measure: F) -> Vec<LayoutLine>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;

    for word in line.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        let width = measure(&candidate);

        if width <= max_width || current.is_empty() {
            current = candidate;
            current_width = width;
        } else {
            lines.push(LayoutLine::new(std::mem::take(&mut current), current_width));
            current_width = measure(word);
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(LayoutLine::new(current, current_width));
    }

    lines
}

/// Wrap one logical line measured with `font` at `size`.
///
/// Every resulting line records the font it was measured against.
pub fn wrap_with_font(line: &str, max_width: f32, font: &FontHandle, size: f32) -> Vec<LayoutLine> {
    wrap_line(line, max_width, |s| font.width_of_text_at_size(s, size))
        .into_iter()
        .map(|l| l.with_font(font.font()))
        .collect()
}

/// Logical lines of a paragraph with surrounding whitespace removed.
pub fn logical_lines(paragraph: &str) -> impl Iterator<Item = &str> {
    paragraph.split('\n').map(str::trim)
}
