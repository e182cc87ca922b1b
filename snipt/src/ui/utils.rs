use itertools::Itertools;
use ratatui::{style::Style, text::Span};
use snippets::match_ranges;

use super::theme;

/// Split `text` into spans, highlighting every case-insensitive occurrence of `search`
pub fn highlight_matches<'a>(text: &'a str, search: &str, base: Style) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    let mut last = 0;

    for range in match_ranges(text, search) {
        if range.start > last {
            spans.push(Span::styled(&text[last..range.start], base));
        }
        spans.push(Span::styled(&text[range.clone()], theme::match_style()));
        last = range.end;
    }

    if last < text.len() || spans.is_empty() {
        spans.push(Span::styled(&text[last..], base));
    }

    spans
}

/// Join tags for display in a table cell
pub fn fmt_tags(tags: &[String]) -> String {
    tags.iter().map(|t| format!("#{}", t)).join(" ")
}
