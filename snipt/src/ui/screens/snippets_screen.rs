use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use snippets::Snippet;

use crate::state::{InputMode, LoadingState, SnippetsState};
use crate::ui::{
    components::{empty_state, help_bar, screen_title, search_input, tag_panel},
    layouts, theme, utils,
};

const HELP_TEXT_NORMAL: &str =
    "j/k: move | /: search | Tab: tags | t: show/hide tags | r: reload | gl: logs | ?: help | q: quit";
const HELP_TEXT_SEARCH: &str = "type to filter | Backspace: delete | Enter: done | Esc: clear";
const HELP_TEXT_TAGS: &str = "h/l: move | Space: toggle tag | t: hide panel | Esc/Tab: back to list";

pub fn render(f: &mut Frame, state: &SnippetsState) {
    let panel = &state.filter_panel;
    let tag_lines = panel.is_expanded().then(|| {
        let width = layouts::tag_panel_inner_width(f.area());
        tag_panel::ChipLines::layout(panel, width, false).height()
    });
    let layout = layouts::snippets_layout(f.area(), tag_lines);

    let title = format!(
        "Snippets ({} of {})",
        state.results.matches.len(),
        state.library.len()
    );
    screen_title::render_screen_title(f, layout.title, &title, &state.loading);

    search_input::render_search_input(
        f,
        layout.search,
        panel.search_text(),
        state.input_mode == InputMode::Search,
    );

    let tags_focused = state.input_mode == InputMode::Tags;
    tag_panel::render_filter_toggle(f, layout.filter_toggle, panel, tags_focused);
    if let Some(tags_area) = layout.tags {
        tag_panel::render_tag_panel(f, tags_area, panel, tags_focused);
    }

    render_list(f, layout.list, state);
    render_preview(f, layout.preview, state);

    let help_text = match state.input_mode {
        InputMode::Normal => HELP_TEXT_NORMAL,
        InputMode::Search => HELP_TEXT_SEARCH,
        InputMode::Tags => HELP_TEXT_TAGS,
    };
    help_bar::render_help_bar(f, layout.help, help_text);
}

fn render_list(f: &mut Frame, area: Rect, state: &SnippetsState) {
    if let LoadingState::Error(error) = &state.loading {
        empty_state::render_error_state(
            f,
            area,
            "Snippets",
            error,
            Some("Check snippets_dir in config.toml, then press r to reload"),
        );
        return;
    }

    if state.library.is_empty() {
        let message = match state.loading {
            LoadingState::Loading(_) | LoadingState::NotStarted => "Loading snippets...",
            _ => "No snippets found",
        };
        empty_state::render_empty_state(f, area, "Snippets", message, None);
        return;
    }

    let filtered = state.filtered_snippets();
    if filtered.is_empty() {
        empty_state::render_empty_state(
            f,
            area,
            "Snippets",
            "No matching snippets",
            Some("Esc clears the search, Tab edits the tag filter"),
        );
        return;
    }

    let search = state.filter_panel.search_text();
    let rows: Vec<Row> = filtered
        .iter()
        .map(|snippet| {
            Row::new(vec![
                Cell::from(Line::from(utils::highlight_matches(
                    &snippet.name,
                    search,
                    Style::default(),
                ))),
                Cell::from(snippet.language.as_str()),
                Cell::from(utils::fmt_tags(&snippet.tags)).style(theme::help_text_style()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(45), // Name
        Constraint::Length(12),     // Language
        Constraint::Min(10),        // Tags
    ];

    let table = Table::new(rows, widths)
        .block(Block::default().borders(Borders::ALL).title("Snippets"))
        .header(Row::new(vec!["Name", "Language", "Tags"]).style(theme::header_style()))
        .row_highlight_style(theme::selection_style());

    f.render_stateful_widget(table, area, &mut state.table_state.borrow_mut());
}

fn render_preview(f: &mut Frame, area: Rect, state: &SnippetsState) {
    let block = Block::default().borders(Borders::ALL).title("Preview");

    match state.selected_snippet() {
        Some(snippet) => {
            let lines = preview_lines(snippet, state.filter_panel.search_text());
            f.render_widget(Paragraph::new(lines).block(block), area);
        }
        None => f.render_widget(block, area),
    }
}

fn preview_lines<'a>(snippet: &'a Snippet, search: &str) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(Span::styled(
        snippet.name.as_str(),
        theme::title_style(),
    ))];

    if !snippet.description.is_empty() {
        lines.push(Line::from(utils::highlight_matches(
            &snippet.description,
            search,
            theme::help_text_style(),
        )));
    }
    if !snippet.tags.is_empty() {
        lines.push(Line::from(Span::styled(
            utils::fmt_tags(&snippet.tags),
            theme::accent_border_style(),
        )));
    }
    lines.push(Line::from(""));

    let gutter = snippet.code.len().to_string().len();
    lines.extend(snippet.code.iter().enumerate().map(|(i, code)| {
        let mut spans = vec![Span::styled(
            format!("{:>width$} ", i + 1, width = gutter),
            theme::placeholder_style(),
        )];
        spans.extend(utils::highlight_matches(code, search, Style::default()));
        Line::from(spans)
    }));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tag_filter::PanelVisibility;
    use ratatui::{backend::TestBackend, Terminal};
    use snippets::SnippetLibrary;

    fn render_to_text(state: &SnippetsState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn expanded_panel_shows_every_tag() {
        let tags: Vec<String> = (0..40).map(|i| format!("tag{:02}", i)).collect();
        let mut state = SnippetsState::new(PanelVisibility::Expanded);
        state.replace_library(SnippetLibrary::from_snippets(vec![
            Snippet::new("everything", "Rust").with_tags(tags.clone()),
        ]));

        let text = render_to_text(&state, 80, 24);

        for tag in &tags {
            assert!(text.contains(tag.as_str()), "{} missing from:\n{}", tag, text);
        }
    }

    #[test]
    fn collapsed_panel_hides_tag_list() {
        let mut state = SnippetsState::new(PanelVisibility::Collapsed);
        state.replace_library(SnippetLibrary::from_snippets(vec![
            Snippet::new("fib", "Python").with_tags(["zzmath"]),
        ]));

        let text = render_to_text(&state, 80, 24);

        assert!(!text.contains(tag_panel::TAG_PANEL_TITLE));
        assert!(text.contains(tag_panel::FILTER_BUTTON_LABEL));
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn preview_numbers_code_lines() {
        let snippet = Snippet::new("fib", "Python")
            .with_description("Fibonacci numbers")
            .with_tags(["math"])
            .with_code(["def fib(n):", "    return n"]);

        let lines = preview_lines(&snippet, "");
        let rendered: Vec<String> = lines.iter().map(text).collect();

        assert_eq!(
            rendered,
            vec![
                "fib",
                "Fibonacci numbers",
                "#math",
                "",
                "1 def fib(n):",
                "2     return n",
            ]
        );
    }

    #[test]
    fn preview_skips_empty_description_and_tags() {
        let snippet = Snippet::new("hello", "Rust").with_code(["println!(\"hi\");"]);

        let lines = preview_lines(&snippet, "");

        assert_eq!(lines.len(), 3);
        assert_eq!(text(&lines[2]), "1 println!(\"hi\");");
    }
}
