use crate::app_core::{AppCore, DataEventHandler};
use crate::commands::executor;
use crate::events::{AppCommand, DataEvent};
use crate::input::{Key, KeyEvent};
use crate::state::{AppState, SnippetsState};
use crate::ui::screens::Screen;
use snippets::{Snippet, SnippetLibrary};

/// Handler that never touches the disk or the runtime.
///
/// Loads only flip the loading flag; feed their results in with
/// [`TestApp::send_data_event`].
pub struct MockDataHandler;

impl MockDataHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockDataHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        executor::execute_command_sync(command, state);
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    /// Empty app, nothing loaded yet
    pub fn new() -> Self {
        Self {
            core: AppCore::new(MockDataHandler::new()),
        }
    }

    /// App whose library load already finished with `snippets`
    pub fn with_snippets(snippets: Vec<Snippet>) -> Self {
        let mut app = Self::new();
        app.send_data_event(DataEvent::SnippetsLoaded {
            library: SnippetLibrary::from_snippets(snippets),
        });
        app
    }

    /// Press `key` without modifiers
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// One key press per character of `text`
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Deliver what a background load would have sent
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// The snippet browser state, wherever it sits in the navigation stack
    pub fn snippets(&self) -> &SnippetsState {
        self.state()
            .history
            .iter()
            .find_map(|screen| match screen {
                Screen::Snippets(state) => Some(state.as_ref()),
                _ => None,
            })
            .expect("Snippets screen should always be in the navigation stack")
    }

    /// Names of the snippets currently passing the filter
    pub fn visible_snippet_names(&self) -> Vec<String> {
        self.snippets()
            .filtered_snippets()
            .iter()
            .map(|s| s.name.clone())
            .collect()
    }

    /// Compare only the screen variant, not its contents
    pub fn assert_screen_type(&self, expected_discriminant: std::mem::Discriminant<Screen>) {
        let current = self.state().current_screen();
        assert_eq!(
            std::mem::discriminant(current),
            expected_discriminant,
            "Unexpected screen on top of the stack: {:?}",
            current
        );
    }

    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "Expected quit to be requested"
        );
    }

    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "Quit was requested unexpectedly"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
