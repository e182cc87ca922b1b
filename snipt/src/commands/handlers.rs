use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::{AppState, InputMode, SnippetsState};
use crate::ui::screens::Screen;

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Ctrl+C always quits, whatever has focus
    if event.is_ctrl_char('c') {
        return Some(AppCommand::Quit);
    }

    // Priority 1: search box and tag panel own the keyboard while focused
    if let Screen::Snippets(snippets_state) = state.current_screen() {
        match snippets_state.input_mode {
            InputMode::Search => return handle_search_keys(event),
            InputMode::Tags => return handle_tag_keys(key),
            InputMode::Normal => {}
        }
    }

    // Priority 2: help popup takes precedence over screen-specific Esc handling
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Handle multi-key sequences
    if let Some(pending) = state.pending_key {
        return match (pending, key) {
            // 'g' followed by 'g' -> navigate to top of list
            ('g', Key::Char('g')) => Some(AppCommand::NavigateToTop),
            // 'g' followed by 'l' -> go to logs
            ('g', Key::Char('l')) => Some(AppCommand::NavigateToLogs),
            // 'g' followed by 's' -> back to snippets
            ('g', Key::Char('s')) => Some(AppCommand::NavigateBack),
            // Any other key clears the pending key
            _ => Some(AppCommand::ClearPendingKey),
        };
    }

    // Esc clears an active search when not typing into it
    if let Screen::Snippets(snippets_state) = state.current_screen() {
        if matches!(key, Key::Esc) {
            return (!snippets_state.filter_panel.search_text().is_empty())
                .then_some(AppCommand::ClearSearch);
        }
    }

    match (state.current_screen(), key) {
        // Global help toggle
        (_, Key::Char('?')) => Some(AppCommand::ToggleHelp),

        // Global quit command
        (_, Key::Char('q')) => Some(AppCommand::Quit),

        // Multi-key sequence initiator: 'g' sets pending key
        (_, Key::Char('g')) => Some(AppCommand::SetPendingKey('g')),

        // Navigate to bottom: 'G' (Shift+g)
        (_, Key::Char('G') | Key::End) => Some(AppCommand::NavigateToBottom),
        (_, Key::Home) => Some(AppCommand::NavigateToTop),

        // Global back navigation (left/h)
        (_, Key::Left | Key::Char('h')) => Some(AppCommand::NavigateBack),

        // Snippets screen
        (Screen::Snippets(..), Key::Up | Key::Char('k')) => Some(AppCommand::SelectPrevious),
        (Screen::Snippets(..), Key::Down | Key::Char('j')) => Some(AppCommand::SelectNext),
        (Screen::Snippets(..), Key::Char('/')) => Some(AppCommand::EnterSearchMode),
        (Screen::Snippets(..), Key::Char('t')) => Some(AppCommand::ToggleTagPanel),
        (Screen::Snippets(snippets_state), Key::Tab) => tag_mode_command(snippets_state),
        (Screen::Snippets(..), Key::Char('r')) => Some(AppCommand::LoadSnippets),

        // Logs screen
        (Screen::Logs(..), Key::Up | Key::Char('k')) => Some(AppCommand::ScrollLogsUp),
        (Screen::Logs(..), Key::Down | Key::Char('j')) => Some(AppCommand::ScrollLogsDown),
        (Screen::Logs(..), Key::PageUp) => Some(AppCommand::ScrollLogsPageUp),
        (Screen::Logs(..), Key::PageDown) => Some(AppCommand::ScrollLogsPageDown),
        (Screen::Logs(..), Key::Esc) => Some(AppCommand::NavigateBack),

        _ => None,
    }
}

fn tag_mode_command(state: &SnippetsState) -> Option<AppCommand> {
    if state.filter_panel.vocabulary().is_empty() {
        tracing::debug!("No tags to focus");
        None
    } else {
        Some(AppCommand::EnterTagMode)
    }
}

fn handle_search_keys(event: KeyEvent) -> Option<AppCommand> {
    if event.is_ctrl_char('u') {
        return Some(AppCommand::ClearSearch);
    }

    match event.key {
        Key::Enter => Some(AppCommand::ExitSearchMode),
        Key::Esc => Some(AppCommand::ClearSearch),
        Key::Backspace => Some(AppCommand::DeleteSearchChar),
        Key::Char(c) if !event.modifiers.ctrl => Some(AppCommand::AppendSearchChar(c)),
        _ => None,
    }
}

fn handle_tag_keys(key: Key) -> Option<AppCommand> {
    match key {
        Key::Left | Key::Up | Key::Char('h') | Key::Char('k') | Key::BackTab => {
            Some(AppCommand::FocusPreviousTag)
        }
        Key::Right | Key::Down | Key::Char('l') | Key::Char('j') => Some(AppCommand::FocusNextTag),
        Key::Char(' ') | Key::Enter => Some(AppCommand::ToggleFocusedTag),
        Key::Char('t') => Some(AppCommand::ToggleTagPanel),
        Key::Esc | Key::Tab => Some(AppCommand::ExitTagMode),
        Key::Char('q') => Some(AppCommand::Quit),
        _ => None,
    }
}
