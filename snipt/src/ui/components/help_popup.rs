use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::ui::{layouts, screens::Screen, theme};

type HelpItem = (&'static str, &'static str);

const SNIPPETS_HELP: &[HelpItem] = &[
    ("↑/k ↓/j", "Move selection"),
    ("r", "Reload snippet library"),
    ("", ""),
    ("--- Search ---", ""),
    ("/", "Search name, description, language and code"),
    ("Enter", "Leave search, keep the text"),
    ("Esc / Ctrl+u", "Clear search"),
    ("", ""),
    ("--- Tags ---", ""),
    ("t", "Show or hide the tag list"),
    ("Tab", "Focus the tag list"),
    ("←/→ h/l", "Move between tags"),
    ("Space / Enter", "Apply or remove the tag"),
    ("Esc / Tab", "Back to the snippet list"),
];

const LOGS_HELP: &[HelpItem] = &[
    ("↑/k", "Older entries"),
    ("↓/j", "Newer entries"),
    ("PgUp / PgDn", "Scroll one page"),
    ("gg / G", "Oldest / newest entry"),
    ("Esc", "Back to snippets"),
];

const GLOBAL_HELP: &[HelpItem] = &[
    ("", ""),
    ("--- Global ---", ""),
    ("h/←", "Navigate back"),
    ("gl / gs", "Go to logs / snippets"),
    ("gg / G", "Top / bottom of list"),
    ("?", "Toggle this help"),
    ("q / Ctrl+c", "Quit"),
];

/// Draw the key reference for `screen` in a centered modal
pub fn render_help_popup(f: &mut Frame, screen: &Screen) {
    let (width, height) = layouts::popup_sizes::LARGE;
    let area = layouts::centered_popup(width, height, f.area());

    let block = Block::default()
        .title(" Help (press ? or Esc to close) ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(theme::accent_border_style());

    let items: Vec<ListItem> = help_items(screen)
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:16}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    f.render_widget(Clear, area);
    f.render_widget(List::new(items).block(block), area);
}

fn help_items(screen: &Screen) -> impl Iterator<Item = &'static HelpItem> {
    let screen_items = match screen {
        Screen::Snippets(..) => SNIPPETS_HELP,
        Screen::Logs(..) => LOGS_HELP,
    };
    screen_items.iter().chain(GLOBAL_HELP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LogsState;

    #[test]
    fn every_screen_ends_with_global_keys() {
        let items: Vec<_> = help_items(&Screen::Logs(LogsState::default())).collect();

        assert_eq!(items.first().map(|(key, _)| *key), Some("↑/k"));
        assert_eq!(items.last().map(|(key, _)| *key), Some("q / Ctrl+c"));
    }
}
