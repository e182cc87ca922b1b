pub mod reducer;
pub mod tag_filter;

use crate::ui::screens::Screen;
use ratatui::widgets::TableState;
use snippets::{Snippet, SnippetLibrary, SnippetQuery};
use std::cell::RefCell;
use tag_filter::{FilterListener, PanelVisibility, TagFilterPanel};
use throbber_widgets_tui::ThrobberState;

/// Represents loading state separate from data state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
    Error(String),
}

/// Which part of the snippets screen receives key input
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
    Tags,
}

pub struct AppState {
    pub history: Vec<Screen>,

    // UI state
    pub help_visible: bool,
    pub pending_key: Option<char>,

    // System
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_snippets(SnippetsState::default())
    }

    pub fn with_snippets(snippets_state: SnippetsState) -> Self {
        Self {
            history: vec![Screen::Snippets(Box::new(snippets_state))],

            help_visible: false,
            pending_key: None,

            should_quit: false,
        }
    }

    /// Get the current screen (last in navigation stack)
    pub fn current_screen(&self) -> &Screen {
        self.history
            .last()
            .expect("Navigation stack should never be empty")
    }

    /// Get mutable reference to current screen
    pub fn current_screen_mut(&mut self) -> &mut Screen {
        self.history
            .last_mut()
            .expect("Navigation stack should never be empty")
    }

    /// The snippet browser lives at the bottom of the navigation stack
    pub fn snippets_mut(&mut self) -> &mut SnippetsState {
        self.history
            .iter_mut()
            .find_map(|screen| match screen {
                Screen::Snippets(state) => Some(state.as_mut()),
                _ => None,
            })
            .expect("Snippets screen should always be in the navigation stack")
    }

    /// Navigate to a new screen (push to stack)
    pub fn navigate_to(&mut self, screen: Screen) {
        tracing::debug!(
            "Navigating to new screen, stack depth: {} -> {}",
            self.history.len(),
            self.history.len() + 1
        );
        self.history.push(screen);
    }

    /// Navigate back (pop from stack)
    /// Returns true if navigation succeeded, false if already at root
    pub fn navigate_back(&mut self) -> bool {
        if self.history.len() > 1 {
            tracing::debug!(
                "Navigating back, stack depth: {} -> {}",
                self.history.len(),
                self.history.len() - 1
            );
            self.history.pop();
            true
        } else {
            tracing::debug!("Cannot navigate back, already at root screen");
            false
        }
    }

    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        match self.current_screen_mut() {
            Screen::Snippets(state) => {
                if let LoadingState::Loading(ref mut throbber_state) = state.loading {
                    return Some(throbber_state);
                }
            }
            Screen::Logs(_) => {
                // Logs screen has no loading state
            }
        }
        None
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Indices of the library snippets matching the last query the panel sent
#[derive(Default, Debug, Clone, PartialEq)]
pub struct FilterResults {
    pub query: SnippetQuery,
    pub matches: Vec<usize>,
}

impl FilterResults {
    pub fn apply(&mut self, library: &SnippetLibrary, query: SnippetQuery) {
        self.matches = library.matching_indices(&query);
        tracing::debug!(
            "Filter {:?} with tags {:?} matched {} of {} snippets",
            query.search,
            query.tags,
            self.matches.len(),
            library.len()
        );
        self.query = query;
    }
}

/// Filter listener that re-runs the query against the library
struct Refilter<'a> {
    library: &'a SnippetLibrary,
    results: &'a mut FilterResults,
}

impl FilterListener for Refilter<'_> {
    fn filter_changed(&mut self, search_text: &str, selected_tags: &[String]) {
        let query = SnippetQuery::new(search_text, selected_tags.to_vec());
        self.results.apply(self.library, query);
    }
}

#[derive(Default, Debug, Clone)]
pub struct SnippetsState {
    pub library: SnippetLibrary,
    pub loading: LoadingState,
    pub filter_panel: TagFilterPanel,
    pub results: FilterResults,
    pub table_state: RefCell<TableState>,
    pub input_mode: InputMode,
}

impl SnippetsState {
    pub fn new(panel_visibility: PanelVisibility) -> Self {
        Self {
            filter_panel: TagFilterPanel::default().with_visibility(panel_visibility),
            ..Self::default()
        }
    }

    /// Snippets passing the current filter, in library order
    pub fn filtered_snippets(&self) -> Vec<&Snippet> {
        let snippets = self.library.snippets();
        self.results
            .matches
            .iter()
            .filter_map(|&index| snippets.get(index))
            .collect()
    }

    pub fn selected_snippet(&self) -> Option<&Snippet> {
        let selected = self.table_state.borrow().selected()?;
        let filtered = self.filtered_snippets();
        filtered
            .get(selected.min(filtered.len().saturating_sub(1)))
            .copied()
    }

    /// Swap in a freshly loaded library.
    ///
    /// The panel prunes its selection without notifying, so the list is
    /// re-filtered here with whatever the panel now holds.
    pub fn replace_library(&mut self, library: SnippetLibrary) {
        self.filter_panel.on_vocabulary_changed(library.vocabulary());
        self.library = library;

        let query = SnippetQuery::new(
            self.filter_panel.search_text(),
            self.filter_panel.selected_tags(),
        );
        self.results.apply(&self.library, query);
        self.reset_selection();
    }

    pub fn set_search_text(&mut self, text: String) {
        let mut listener = Refilter {
            library: &self.library,
            results: &mut self.results,
        };
        self.filter_panel.set_search_text(text, &mut listener);
        self.reset_selection();
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut listener = Refilter {
            library: &self.library,
            results: &mut self.results,
        };
        self.filter_panel.push_search_char(c, &mut listener);
        self.reset_selection();
    }

    pub fn pop_search_char(&mut self) {
        let mut listener = Refilter {
            library: &self.library,
            results: &mut self.results,
        };
        self.filter_panel.pop_search_char(&mut listener);
        self.reset_selection();
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        let mut listener = Refilter {
            library: &self.library,
            results: &mut self.results,
        };
        self.filter_panel.toggle_tag(tag, &mut listener);
        self.reset_selection();
    }

    /// Toggle the chip under the cursor, resolved to its tag value first
    pub fn toggle_focused_tag(&mut self) {
        if let Some(tag) = self.filter_panel.focused_tag().map(str::to_string) {
            self.toggle_tag(&tag);
        }
    }

    // Reset table selection when filter changes
    fn reset_selection(&mut self) {
        self.table_state = RefCell::new(TableState::default().with_selected(0));
    }
}

impl Scrollable for SnippetsState {
    fn num_items(&self) -> usize {
        self.results.matches.len()
    }

    fn table_state(&self) -> &RefCell<TableState> {
        &self.table_state
    }
}

#[derive(Default, Debug, Clone)]
pub struct LogsState {
    pub scroll_offset: usize,
    pub total_entries: usize,
}

pub trait Scrollable {
    fn num_items(&self) -> usize;
    fn table_state(&self) -> &RefCell<TableState>;

    fn select_prev(&mut self) {
        let num_items = self.num_items();
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            match table_state.selected() {
                Some(0) | None => table_state.select(Some(num_items - 1)),
                Some(i) => table_state.select(Some(i.min(num_items) - 1)),
            }
        }
    }

    fn select_next(&mut self) {
        let num_items = self.num_items();
        let mut table_state = self.table_state().borrow_mut();
        if num_items > 0 {
            match table_state.selected() {
                Some(i) if i + 1 < num_items => table_state.select(Some(i + 1)),
                _ => table_state.select(Some(0)),
            }
        }
    }
}
