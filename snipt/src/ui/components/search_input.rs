//! Search box of the filter toolbar.

use ratatui::prelude::Rect;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

pub const SEARCH_PLACEHOLDER: &str = "SEARCH SNIPPETS";

/// Render the search field with the panel's current search text.
///
/// Shows the placeholder while the text is empty and draws a cursor when
/// the field has keyboard focus.
pub fn render_search_input(f: &mut Frame, area: Rect, text: &str, focused: bool) {
    let line = search_line(text, focused);

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::focus_border_style(focused))
            .title(" / search "),
    );

    f.render_widget(input, area);
}

fn search_line(text: &str, focused: bool) -> Line<'_> {
    let mut spans = vec![Span::raw("🔍 ")];
    if text.is_empty() && !focused {
        spans.push(Span::styled(SEARCH_PLACEHOLDER, theme::placeholder_style()));
    } else {
        spans.push(Span::raw(text));
    }
    if focused {
        spans.push(Span::styled("_", theme::loading_style()));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn empty_unfocused_search_shows_placeholder() {
        assert!(plain(&search_line("", false)).ends_with(SEARCH_PLACEHOLDER));
    }

    #[test]
    fn focused_search_shows_text_and_cursor() {
        assert!(plain(&search_line("fib", true)).ends_with("fib_"));
        assert!(!plain(&search_line("", true)).contains(SEARCH_PLACEHOLDER));
    }
}
