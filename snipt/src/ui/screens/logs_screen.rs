use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table},
};
use tracing::Level;

use crate::log_buffer::LogBuffer;
use crate::state::LogsState;
use crate::ui::{
    components::{empty_state, help_bar},
    layouts, theme,
};

const TARGET_WIDTH: usize = 25;

pub fn render(f: &mut Frame, state: &LogsState, log_buffer: &LogBuffer) {
    let (title_area, content_area, help_area) = layouts::screen_layout(f.area());

    let title = format!("Logs ({} entries)", state.total_entries);
    f.render_widget(Paragraph::new(title).style(theme::title_style()), title_area);

    render_logs(f, content_area, state, log_buffer);
    render_help(f, help_area, state);
}

fn render_logs(f: &mut Frame, area: Rect, state: &LogsState, log_buffer: &LogBuffer) {
    let entries = log_buffer.get_entries();
    let total = entries.len();

    if total == 0 {
        empty_state::render_empty_state(f, area, "Session Logs", "No logs yet", None);
        return;
    }

    // Visible window counted from the bottom, newest entry last
    let inner_height = area.height.saturating_sub(3) as usize; // borders + header
    let offset = state.scroll_offset.min(total.saturating_sub(1));
    let end = total - offset;
    let start = end.saturating_sub(inner_height);

    let rows: Vec<Row> = entries[start..end]
        .iter()
        .map(|entry| {
            Row::new(vec![
                entry.timestamp.format("%H:%M:%S%.3f").to_string(),
                level_label(entry.level).to_string(),
                truncate_target(&entry.target, TARGET_WIDTH),
                entry.message.clone(),
            ])
            .style(level_style(entry.level))
        })
        .collect();

    let widths = [
        Constraint::Length(12),                  // Time
        Constraint::Length(5),                   // Level
        Constraint::Length(TARGET_WIDTH as u16), // Target
        Constraint::Min(30),                     // Message
    ];

    let table = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Logs [{}-{} of {}] ",
            start + 1,
            end,
            total
        )))
        .header(Row::new(vec!["Time", "Level", "Target", "Message"]).style(theme::header_style()));

    f.render_widget(table, area);
}

fn render_help(f: &mut Frame, area: Rect, state: &LogsState) {
    let scroll_info = if state.scroll_offset > 0 {
        format!(" (scrolled {} from bottom)", state.scroll_offset)
    } else {
        String::new()
    };

    let help_text = format!(
        "j/k: scroll | G: bottom | gg: top | PgUp/PgDn: page | h/Esc: back | ?: help{}",
        scroll_info
    );

    help_bar::render_help_bar(f, area, &help_text);
}

fn level_label(level: Level) -> &'static str {
    match level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARN ",
        Level::INFO => "INFO ",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

fn level_style(level: Level) -> Style {
    match level {
        Level::ERROR => theme::error_style().add_modifier(Modifier::BOLD),
        Level::WARN => theme::loading_style(),
        Level::INFO => Style::default().fg(Color::Green),
        Level::DEBUG => Style::default().fg(Color::Blue),
        Level::TRACE => Style::default().fg(Color::DarkGray),
    }
}

/// Keep the tail of a module path, prefixed with "..." when cut
fn truncate_target(target: &str, max_len: usize) -> String {
    let len = target.chars().count();
    if len <= max_len {
        target.to_string()
    } else {
        let tail: String = target.chars().skip(len - max_len + 3).collect();
        format!("...{}", tail)
    }
}
