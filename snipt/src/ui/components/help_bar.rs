//! Bottom line of key hints.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render `text` as hints of the form `key: action | key: action`.
/// The key part of each hint is highlighted.
pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(hint_line(text))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}

fn hint_line(text: &str) -> Line<'_> {
    let mut spans = Vec::new();

    for (i, hint) in text.split(" | ").enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme::placeholder_style()));
        }
        match hint.split_once(": ") {
            Some((key, action)) => {
                spans.push(Span::styled(key, theme::header_style()));
                spans.push(Span::styled(format!(" {}", action), theme::help_text_style()));
            }
            None => spans.push(Span::styled(hint, theme::help_text_style())),
        }
    }

    Line::from(spans)
}
