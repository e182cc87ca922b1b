use crate::commands::handlers;
use crate::events::{AppCommand, DataEvent};
use crate::input::KeyEvent;
use crate::state::{reducer, AppState};

/// Side-effect boundary for command execution (production = background loader, test = mock)
pub trait DataEventHandler {
    /// Execute a command with access to mutable state
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState);
}

/// Application core without terminal dependencies
///
/// Generic over the handler so tests can run every command synchronously.
pub struct AppCore<H: DataEventHandler> {
    ui_state: AppState,
    handler: H,
}

impl<H: DataEventHandler> AppCore<H> {
    pub fn new(handler: H) -> Self {
        Self::with_state(AppState::new(), handler)
    }

    pub fn with_state(ui_state: AppState, handler: H) -> Self {
        Self { ui_state, handler }
    }

    /// Translate a key press into a command and execute it
    pub fn handle_key(&mut self, event: KeyEvent) {
        if let Some(command) = handlers::handle_key_input(event, &self.ui_state) {
            self.execute(command);
        }
    }

    /// Execute a command directly, bypassing key mapping
    pub fn execute(&mut self, command: AppCommand) {
        self.handler
            .execute_with_context(command, &mut self.ui_state);
    }

    /// Apply a data event (background results, or injected by tests)
    pub fn handle_data_event(&mut self, event: DataEvent) {
        reducer::reduce_data_event(&mut self.ui_state, event);
    }

    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.ui_state
    }

    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}
