//! Tag filter toggle and the collapsible list of tag chips.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::tag_filter::TagFilterPanel;
use crate::ui::theme;

pub const FILTER_BUTTON_LABEL: &str = "Filter By Tags";
pub const TAG_PANEL_TITLE: &str = "cell tags";
const CHECK_MARK: &str = "✓";

/// Render the "Filter By Tags" toggle with an arrow showing panel state
pub fn render_filter_toggle(f: &mut Frame, area: Rect, panel: &TagFilterPanel, focused: bool) {
    let button = Paragraph::new(toggle_line(panel))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::focus_border_style(focused)),
        );

    f.render_widget(button, area);
}

/// Chips laid out into lines no wider than `width`.
///
/// A chip never straddles two lines. Also returns the index of the line
/// holding the chip cursor.
pub struct ChipLines<'a> {
    pub lines: Vec<Line<'a>>,
    pub focused_line: usize,
}

impl<'a> ChipLines<'a> {
    pub fn layout(panel: &'a TagFilterPanel, width: u16, show_cursor: bool) -> Self {
        if panel.vocabulary().is_empty() {
            return Self {
                lines: vec![Line::from(Span::styled(
                    "No tags in library",
                    theme::help_text_style(),
                ))],
                focused_line: 0,
            };
        }

        let width = usize::from(width.max(1));
        let mut lines = Vec::new();
        let mut current: Vec<Span> = Vec::new();
        let mut used = 0;
        let mut focused_line = 0;

        for chip in panel.chips() {
            let label = if chip.selected {
                format!(" {} {} ", chip.tag, CHECK_MARK)
            } else {
                format!(" {} ", chip.tag)
            };
            let style = theme::tag_chip_style(chip.selected, show_cursor && chip.focused);
            let span = Span::styled(label, style);

            if used > 0 && used + span.width() > width {
                lines.push(Line::from(std::mem::take(&mut current)));
                used = 0;
            }
            if chip.focused {
                focused_line = lines.len();
            }

            used += span.width() + 1;
            current.push(span);
            current.push(Span::raw(" "));
        }
        lines.push(Line::from(current));

        Self {
            lines,
            focused_line,
        }
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }
}

/// Render one chip per vocabulary tag.
///
/// When the area is too short for every line, the list scrolls so the line
/// holding the chip cursor stays visible. The cursor itself is only drawn
/// while the panel has keyboard focus.
pub fn render_tag_panel(f: &mut Frame, area: Rect, panel: &TagFilterPanel, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::focus_border_style(focused))
        .title(format!(" {} ", TAG_PANEL_TITLE));
    let inner = block.inner(area);

    let chips = ChipLines::layout(panel, inner.width, focused);
    let offset = scroll_offset(chips.focused_line, inner.height);

    let tags = Paragraph::new(chips.lines)
        .scroll((offset, 0))
        .block(block);

    f.render_widget(tags, area);
}

/// First visible line so that `focused_line` fits in `visible` rows
fn scroll_offset(focused_line: usize, visible: u16) -> u16 {
    let visible = usize::from(visible.max(1));
    let offset = focused_line.saturating_sub(visible - 1);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

fn toggle_line(panel: &TagFilterPanel) -> Line<'static> {
    let arrow = if panel.is_expanded() { "▴" } else { "▾" };
    let selected = panel.selected_tags().len();

    let mut spans = vec![Span::raw(format!("{} {}", FILTER_BUTTON_LABEL, arrow))];
    if selected > 0 {
        spans.push(Span::styled(
            format!(" ({})", selected),
            theme::tag_chip_style(true, false),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn plain(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn numbered_tags(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("tag{:02}", i)).collect()
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
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
    fn chips_are_sorted_and_selected_ones_are_checked() {
        let mut panel = TagFilterPanel::new(vec!["viz".into(), "io".into(), "math".into()]);
        panel.toggle_tag("math", &mut |_: &str, _: &[String]| {});

        let chips = ChipLines::layout(&panel, 80, false);

        assert_eq!(chips.lines.len(), 1);
        assert_eq!(plain(&chips.lines[0].spans), " io   math ✓   viz  ");
    }

    #[test]
    fn chips_wrap_without_splitting() {
        let panel = TagFilterPanel::new(numbered_tags(40));

        // " tagNN " is 7 columns plus a spacer, so 9 chips fit in 76 columns
        let chips = ChipLines::layout(&panel, 76, false);

        assert_eq!(chips.lines.len(), 5);
        for line in &chips.lines {
            assert!(line.width() <= 77);
        }
        let rejoined: String = chips.lines.iter().map(|l| plain(&l.spans)).collect();
        for tag in panel.vocabulary() {
            assert_eq!(rejoined.matches(&format!(" {} ", tag)).count(), 1);
        }
    }

    #[test]
    fn focused_line_follows_cursor() {
        let mut panel = TagFilterPanel::new(numbered_tags(40));
        for _ in 0..20 {
            panel.focus_next_tag();
        }

        let chips = ChipLines::layout(&panel, 76, true);

        assert_eq!(panel.focused_tag(), Some("tag20"));
        assert_eq!(chips.focused_line, 2);
    }

    #[test]
    fn scroll_keeps_focused_line_visible() {
        assert_eq!(scroll_offset(0, 3), 0);
        assert_eq!(scroll_offset(2, 3), 0);
        assert_eq!(scroll_offset(4, 3), 2);
        assert_eq!(scroll_offset(4, 0), 4);
    }

    #[test]
    fn short_panel_scrolls_to_focused_chip() {
        let mut panel = TagFilterPanel::new(numbered_tags(40));
        panel.focus_previous_tag();
        assert_eq!(panel.focused_tag(), Some("tag39"));

        let mut terminal = Terminal::new(TestBackend::new(80, 5)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_tag_panel(f, area, &panel, true);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("tag39"));
        assert!(!text.contains("tag00"));
    }

    #[test]
    fn toggle_shows_arrow_and_selection_count() {
        let mut panel = TagFilterPanel::new(vec!["io".into()]);
        let collapsed: String = plain(&toggle_line(&panel).spans);
        assert_eq!(collapsed, "Filter By Tags ▾");

        panel.toggle_panel_visibility();
        panel.toggle_tag("io", &mut |_: &str, _: &[String]| {});
        let expanded: String = plain(&toggle_line(&panel).spans);
        assert_eq!(expanded, "Filter By Tags ▴ (1)");
    }
}
