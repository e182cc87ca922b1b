//! Reusable layout builders for consistent screen structure.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{
    FILTER_TOGGLE_WIDTH, HELP_BAR_HEIGHT, LIST_MIN_HEIGHT, LIST_WIDTH_PERCENT, SCREEN_MARGIN,
    TITLE_HEIGHT, TOOLBAR_HEIGHT,
};

/// Standard screen layout with title, content area, and help bar.
///
/// Returns a tuple of (title_area, content_area, help_area)
pub fn screen_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Areas of the snippet browser
pub struct SnippetsLayout {
    pub title: Rect,
    pub search: Rect,
    pub filter_toggle: Rect,
    /// Only present while the tag panel is expanded
    pub tags: Option<Rect>,
    pub list: Rect,
    pub preview: Rect,
    pub help: Rect,
}

/// Snippet browser layout: toolbar (search + filter toggle), optional tag
/// list, then the snippet list beside a preview pane.
///
/// `tag_lines` is the number of chip lines of an expanded tag panel, `None`
/// when collapsed. The panel grows to fit them, leaving the list at least
/// `LIST_MIN_HEIGHT` rows; the panel scrolls past that.
pub fn snippets_layout(area: Rect, tag_lines: Option<u16>) -> SnippetsLayout {
    let max_tag_height = area.height.saturating_sub(
        2 * SCREEN_MARGIN + TITLE_HEIGHT + TOOLBAR_HEIGHT + LIST_MIN_HEIGHT + HELP_BAR_HEIGHT,
    );
    let tag_height = tag_lines.map_or(0, |lines| lines.saturating_add(2).min(max_tag_height));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(TOOLBAR_HEIGHT),
            Constraint::Length(tag_height),
            Constraint::Min(LIST_MIN_HEIGHT),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    let toolbar = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(FILTER_TOGGLE_WIDTH)])
        .split(rows[1]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(LIST_WIDTH_PERCENT),
            Constraint::Percentage(100 - LIST_WIDTH_PERCENT),
        ])
        .split(rows[3]);

    SnippetsLayout {
        title: rows[0],
        search: toolbar[0],
        filter_toggle: toolbar[1],
        tags: tag_lines.map(|_| rows[2]),
        list: content[0],
        preview: content[1],
        help: rows[4],
    }
}

/// Width available to tag chips inside the bordered tag panel
pub fn tag_panel_inner_width(area: Rect) -> u16 {
    area.width.saturating_sub(2 * SCREEN_MARGIN + 2)
}

/// Split a title area into title text and loading indicator.
///
/// Returns (title_text_area, loading_indicator_area)
pub fn title_with_loading(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Create a centered popup rectangle.
///
/// # Arguments
/// * `percent_x` - Width as percentage of parent (0-100)
/// * `percent_y` - Height as percentage of parent (0-100)
/// * `area` - The parent area to center within
pub fn centered_popup(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Standard popup sizes
pub mod popup_sizes {
    /// Large popup (80% x 80%) - for help screens
    pub const LARGE: (u16, u16) = (80, 80);
}
