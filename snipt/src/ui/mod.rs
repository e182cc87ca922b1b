pub mod components;
pub mod layouts;
pub mod screens;
pub mod theme;
pub mod utils;

use crate::log_buffer::LogBuffer;
use crate::state::AppState;
use ratatui::Frame;
use screens::*;

/// Draw the screen on top of the navigation stack, then the help overlay.
/// Rendering only reads state.
pub fn render_app(f: &mut Frame, state: &AppState, log_buffer: &LogBuffer) {
    match state.current_screen() {
        Screen::Snippets(snippets_state) => {
            snippets_screen::render(f, snippets_state);
        }
        Screen::Logs(logs_state) => {
            logs_screen::render(f, logs_state, log_buffer);
        }
    }

    if state.help_visible {
        components::help_popup::render_help_popup(f, state.current_screen());
    }
}
