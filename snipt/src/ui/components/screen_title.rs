//! Title line shared by every screen, with the library load status on the right.

use ratatui::prelude::Rect;
use ratatui::{
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use throbber_widgets_tui::{Throbber, BRAILLE_EIGHT};

use crate::state::LoadingState;
use crate::ui::{layouts, theme};

pub fn render_screen_title(f: &mut Frame, area: Rect, title: &str, loading_state: &LoadingState) {
    let (title_area, status_area) = layouts::title_with_loading(area);

    f.render_widget(Paragraph::new(title).style(theme::title_style()), title_area);

    match loading_state {
        LoadingState::NotStarted => {}
        LoadingState::Loading(throbber_state) => {
            let spinner = Throbber::default().throbber_set(BRAILLE_EIGHT);
            f.render_stateful_widget(spinner, status_area, &mut throbber_state.clone());
        }
        LoadingState::Loaded => render_status(f, status_area, "✓", Color::Green),
        LoadingState::Error(_) => render_status(f, status_area, "x", theme::COLOR_ERROR),
    }
}

fn render_status(f: &mut Frame, area: Rect, symbol: &str, color: Color) {
    f.render_widget(
        Paragraph::new(symbol).style(Style::default().fg(color)),
        area,
    );
}
