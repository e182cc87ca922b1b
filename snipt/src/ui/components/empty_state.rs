//! Placeholder shown where a list would be when there is nothing to list.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme;

/// Centered notice inside a titled block, with an optional hint line below
pub fn render_empty_state(f: &mut Frame, area: Rect, title: &str, message: &str, hint: Option<&str>) {
    render_notice(f, area, title, Span::styled(message, theme::loading_style()), hint);
}

/// Same as [`render_empty_state`], with the message in the error color
pub fn render_error_state(f: &mut Frame, area: Rect, title: &str, error: &str, hint: Option<&str>) {
    render_notice(f, area, title, Span::styled(error, theme::error_style()), hint);
}

fn render_notice(f: &mut Frame, area: Rect, title: &str, message: Span, hint: Option<&str>) {
    let hint_lines = hint
        .into_iter()
        .flat_map(|h| [Line::default(), Line::styled(h, theme::help_text_style())]);

    let lines: Vec<Line> = [Line::default(), Line::from(message)]
        .into_iter()
        .chain(hint_lines)
        .collect();

    let notice = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(notice, area);
}
