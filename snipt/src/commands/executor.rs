use crate::background::{snippet_loader::SnippetLoader, BackgroundTaskManager};
use crate::events::AppCommand;
use crate::state::*;
use crate::ui::screens::Screen;
use throbber_widgets_tui::ThrobberState;

const LOG_PAGE_SIZE: usize = 20;

/// Execute a command, spawning background work for commands that need it
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    loader: &SnippetLoader,
) {
    // Don't log on the logs screen to avoid a feedback loop
    if !matches!(state.current_screen(), Screen::Logs(_)) {
        tracing::info!("Executing command: {:?}", command);
    }

    match command {
        AppCommand::LoadSnippets => {
            mark_loading(state);
            let loader = loader.clone();
            task_manager.spawn_load_task("load_snippets", async move {
                loader.load_snippets().await;
            });
            clear_pending_key(state);
        }
        command => execute_command_sync(command, state),
    }
}

/// Synchronous command execution (no background tasks)
///
/// Handles every pure state transition. `LoadSnippets` only marks the list
/// as loading here; tests inject the resulting `DataEvent` themselves.
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) {
    // Save whether we're setting a pending key (we don't want to clear it in that case)
    let is_setting_pending_key = matches!(command, AppCommand::SetPendingKey(_));

    match command {
        // Simple state updates
        AppCommand::Quit => state.should_quit = true,
        AppCommand::ToggleHelp => state.help_visible = !state.help_visible,
        AppCommand::SetPendingKey(c) => state.pending_key = Some(c),
        AppCommand::ClearPendingKey => state.pending_key = None,
        AppCommand::LoadSnippets => mark_loading(state),

        // Navigation
        AppCommand::NavigateBack => {
            state.navigate_back();
        }
        AppCommand::NavigateToLogs => {
            if !matches!(state.current_screen(), Screen::Logs(_)) {
                state.navigate_to(Screen::Logs(LogsState::default()));
            }
        }
        AppCommand::NavigateToTop => match state.current_screen_mut() {
            Screen::Snippets(s) => s.table_state.borrow_mut().select(Some(0)),
            Screen::Logs(s) => s.scroll_offset = s.total_entries.saturating_sub(1),
        },
        AppCommand::NavigateToBottom => match state.current_screen_mut() {
            Screen::Snippets(s) => {
                let len = s.num_items();
                if len > 0 {
                    s.table_state.borrow_mut().select(Some(len - 1));
                }
            }
            Screen::Logs(s) => s.scroll_offset = 0,
        },
        AppCommand::SelectNext => {
            if let Screen::Snippets(s) = state.current_screen_mut() {
                s.select_next();
            }
        }
        AppCommand::SelectPrevious => {
            if let Screen::Snippets(s) = state.current_screen_mut() {
                s.select_prev();
            }
        }

        // Search box
        AppCommand::EnterSearchMode => state.snippets_mut().input_mode = InputMode::Search,
        AppCommand::ExitSearchMode => {
            // Keep search text intact - filter remains active
            state.snippets_mut().input_mode = InputMode::Normal;
        }
        AppCommand::AppendSearchChar(c) => state.snippets_mut().push_search_char(c),
        AppCommand::DeleteSearchChar => state.snippets_mut().pop_search_char(),
        AppCommand::ClearSearch => {
            let s = state.snippets_mut();
            s.set_search_text(String::new());
            s.input_mode = InputMode::Normal;
        }

        // Tag panel
        AppCommand::ToggleTagPanel => {
            let s = state.snippets_mut();
            s.filter_panel.toggle_panel_visibility();
            if !s.filter_panel.is_expanded() && s.input_mode == InputMode::Tags {
                s.input_mode = InputMode::Normal;
            }
        }
        AppCommand::EnterTagMode => {
            let s = state.snippets_mut();
            if !s.filter_panel.is_expanded() {
                s.filter_panel.toggle_panel_visibility();
            }
            s.input_mode = InputMode::Tags;
        }
        AppCommand::ExitTagMode => state.snippets_mut().input_mode = InputMode::Normal,
        AppCommand::FocusNextTag => state.snippets_mut().filter_panel.focus_next_tag(),
        AppCommand::FocusPreviousTag => state.snippets_mut().filter_panel.focus_previous_tag(),
        AppCommand::ToggleFocusedTag => state.snippets_mut().toggle_focused_tag(),

        // Log screen
        AppCommand::ScrollLogsUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                // Scroll up means going back in time (increase offset)
                if s.scroll_offset < s.total_entries.saturating_sub(1) {
                    s.scroll_offset += 1;
                }
            }
        }
        AppCommand::ScrollLogsDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(1);
            }
        }
        AppCommand::ScrollLogsPageUp => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset =
                    (s.scroll_offset + LOG_PAGE_SIZE).min(s.total_entries.saturating_sub(1));
            }
        }
        AppCommand::ScrollLogsPageDown => {
            if let Screen::Logs(s) = state.current_screen_mut() {
                s.scroll_offset = s.scroll_offset.saturating_sub(LOG_PAGE_SIZE);
            }
        }
    }

    // Clear pending key after any command except SetPendingKey
    // This ensures multi-key sequences are properly reset after completion
    if !is_setting_pending_key {
        clear_pending_key(state);
    }
}

fn mark_loading(state: &mut AppState) {
    let s = state.snippets_mut();
    // Keep showing the current library while a reload runs
    if !matches!(s.loading, LoadingState::Loading(_)) {
        s.loading = LoadingState::Loading(ThrobberState::default());
    }
}

fn clear_pending_key(state: &mut AppState) {
    if state.pending_key.is_some() {
        state.pending_key = None;
    }
}
