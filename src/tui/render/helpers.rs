use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::util::line_input::LineInput;
use crate::util::unicode;

/// Checkbox symbol for a completion flag (markdown checkbox style)
pub(super) fn checkbox(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Pad `spans` with blanks in `style` up to `width` cells
pub(super) fn pad_to_width(spans: &mut Vec<Span<'static>>, width: usize, style: Style) {
    let used = spans_width(spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
    }
}

/// Spans for a single-line input. When `focused`, the grapheme under the
/// cursor (or a trailing blank) is drawn reversed.
pub(super) fn input_spans(input: &LineInput, focused: bool, style: Style) -> Vec<Span<'static>> {
    let text = input.text();
    if !focused {
        return vec![Span::styled(text.to_string(), style)];
    }
    let cursor = input.cursor();
    let cursor_style = style.add_modifier(Modifier::REVERSED);
    let mut spans = Vec::new();
    if cursor > 0 {
        spans.push(Span::styled(text[..cursor].to_string(), style));
    }
    match unicode::next_grapheme_boundary(text, cursor) {
        Some(end) => {
            spans.push(Span::styled(text[cursor..end].to_string(), cursor_style));
            if end < text.len() {
                spans.push(Span::styled(text[end..].to_string(), style));
            }
        }
        None => spans.push(Span::styled(" ", cursor_style)),
    }
    spans
}
