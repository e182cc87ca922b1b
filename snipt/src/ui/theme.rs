//! Colors, sizes and styles used across the snippet browser.

use ratatui::style::{Color, Modifier, Style};

// Palette

pub const COLOR_SELECTION_BG: Color = Color::DarkGray;
pub const COLOR_HEADER: Color = Color::Yellow;
pub const COLOR_HELP_TEXT: Color = Color::Gray;
pub const COLOR_TITLE: Color = Color::Cyan;
pub const COLOR_LOADING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_BORDER_ACCENT: Color = Color::Cyan;
/// Border of the search box or tag list while it owns the keyboard
pub const COLOR_FOCUS: Color = Color::Yellow;
pub const COLOR_PLACEHOLDER: Color = Color::DarkGray;
pub const COLOR_TAG_APPLIED: Color = Color::Green;
pub const COLOR_TAG_UNAPPLIED: Color = Color::Gray;
pub const COLOR_MATCH_BG: Color = Color::Yellow;

// Sizes

pub const SCREEN_MARGIN: u16 = 1;
pub const TITLE_HEIGHT: u16 = 1;
pub const HELP_BAR_HEIGHT: u16 = 3;
/// Search box and filter toggle row
pub const TOOLBAR_HEIGHT: u16 = 3;
/// Rows the snippet list keeps however many tag lines there are
pub const LIST_MIN_HEIGHT: u16 = 5;
pub const FILTER_TOGGLE_WIDTH: u16 = 24;
/// Share of the content width given to the snippet list; the preview gets the rest
pub const LIST_WIDTH_PERCENT: u16 = 45;

// Styles

fn bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn selection_style() -> Style {
    Style::default()
        .bg(COLOR_SELECTION_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn header_style() -> Style {
    bold(COLOR_HEADER)
}

pub fn help_text_style() -> Style {
    Style::default().fg(COLOR_HELP_TEXT)
}

pub fn title_style() -> Style {
    bold(COLOR_TITLE)
}

pub fn loading_style() -> Style {
    Style::default().fg(COLOR_LOADING)
}

pub fn error_style() -> Style {
    Style::default().fg(COLOR_ERROR)
}

pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_BORDER_ACCENT)
}

pub fn focus_border_style(focused: bool) -> Style {
    if focused {
        bold(COLOR_FOCUS)
    } else {
        Style::default()
    }
}

pub fn placeholder_style() -> Style {
    Style::default()
        .fg(COLOR_PLACEHOLDER)
        .add_modifier(Modifier::ITALIC)
}

/// Applied chips are bold green; the chip under the cursor is drawn reversed
pub fn tag_chip_style(applied: bool, focused: bool) -> Style {
    let style = if applied {
        bold(COLOR_TAG_APPLIED)
    } else {
        Style::default().fg(COLOR_TAG_UNAPPLIED)
    };

    if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

/// Highlight for text matching the search
pub fn match_style() -> Style {
    Style::default().fg(Color::Black).bg(COLOR_MATCH_BG)
}
