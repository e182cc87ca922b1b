//! Tag filter toolbar state: search text, selected tags and panel visibility.
//!
//! The panel never filters anything itself. Every change to the search text
//! or tag selection is forwarded to a [`FilterListener`] supplied by the
//! caller, which owns the actual filtering.

use std::collections::BTreeSet;
use std::iter;

/// Receives the combined (search text, selected tags) state whenever it changes
pub trait FilterListener {
    fn filter_changed(&mut self, search_text: &str, selected_tags: &[String]);
}

impl<F> FilterListener for F
where
    F: FnMut(&str, &[String]),
{
    fn filter_changed(&mut self, search_text: &str, selected_tags: &[String]) {
        self(search_text, selected_tags)
    }
}

/// Whether the tag list is shown below the toolbar
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelVisibility {
    #[default]
    Collapsed,
    Expanded,
}

impl PanelVisibility {
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }
}

/// A tag chip as it should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagChip<'a> {
    pub tag: &'a str,
    pub selected: bool,
    pub focused: bool,
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct TagFilterPanel {
    /// Sorted, distinct copy of the caller's vocabulary
    vocabulary: Vec<String>,
    /// Always a subset of `vocabulary`
    selected: BTreeSet<String>,
    search_text: String,
    visibility: PanelVisibility,
    /// Chip cursor, index into `vocabulary`
    focused: usize,
}

impl TagFilterPanel {
    pub fn new(vocabulary: Vec<String>) -> Self {
        Self {
            vocabulary: normalize(vocabulary),
            ..Self::default()
        }
    }

    pub fn with_visibility(mut self, visibility: PanelVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Selected tags in lexicographic order
    pub fn selected_tags(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected.contains(tag)
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn visibility(&self) -> PanelVisibility {
        self.visibility
    }

    pub fn is_expanded(&self) -> bool {
        self.visibility.is_expanded()
    }

    /// Tag under the chip cursor, if the vocabulary is non-empty
    pub fn focused_tag(&self) -> Option<&str> {
        self.vocabulary.get(self.focused).map(String::as_str)
    }

    /// Every vocabulary tag exactly once, sorted, with its selection and focus
    pub fn chips(&self) -> impl Iterator<Item = TagChip<'_>> {
        self.vocabulary
            .iter()
            .enumerate()
            .map(move |(index, tag)| TagChip {
                tag,
                selected: self.is_selected(tag),
                focused: index == self.focused,
            })
    }

    /// Replace the search text and notify the listener
    pub fn set_search_text(&mut self, text: impl Into<String>, listener: &mut impl FilterListener) {
        self.search_text = text.into();
        self.notify(listener);
    }

    pub fn push_search_char(&mut self, c: char, listener: &mut impl FilterListener) {
        let text: String = self.search_text.chars().chain(iter::once(c)).collect();
        self.set_search_text(text, listener);
    }

    pub fn pop_search_char(&mut self, listener: &mut impl FilterListener) {
        let mut text = self.search_text.clone();
        text.pop();
        self.set_search_text(text, listener);
    }

    /// Select `tag` if unselected, deselect it otherwise, then notify.
    ///
    /// Tags outside the vocabulary are never selected; the listener is still
    /// called once with the unchanged state.
    pub fn toggle_tag(&mut self, tag: &str, listener: &mut impl FilterListener) {
        let selected: BTreeSet<String> = if self.selected.contains(tag) {
            self.selected.iter().filter(|t| *t != tag).cloned().collect()
        } else if self.vocabulary.iter().any(|t| t == tag) {
            self.selected
                .iter()
                .cloned()
                .chain(iter::once(tag.to_string()))
                .collect()
        } else {
            tracing::debug!("Ignoring toggle of unknown tag {:?}", tag);
            self.selected.clone()
        };

        self.selected = selected;
        self.notify(listener);
    }

    /// Toggle the tag under the chip cursor. No-op on an empty vocabulary.
    pub fn toggle_focused_tag(&mut self, listener: &mut impl FilterListener) {
        if let Some(tag) = self.focused_tag().map(str::to_string) {
            self.toggle_tag(&tag, listener);
        }
    }

    /// Flip between collapsed and expanded. Never notifies.
    pub fn toggle_panel_visibility(&mut self) {
        self.visibility = self.visibility.toggled();
    }

    pub fn focus_next_tag(&mut self) {
        if !self.vocabulary.is_empty() {
            self.focused = (self.focused + 1) % self.vocabulary.len();
        }
    }

    pub fn focus_previous_tag(&mut self) {
        if !self.vocabulary.is_empty() {
            self.focused = self
                .focused
                .checked_sub(1)
                .unwrap_or(self.vocabulary.len() - 1);
        }
    }

    /// Adopt a new vocabulary, dropping selected tags it no longer contains.
    ///
    /// Does not notify: whoever changed the vocabulary re-filters on its own.
    pub fn on_vocabulary_changed(&mut self, new_tags: Vec<String>) {
        let vocabulary = normalize(new_tags);
        let selected: BTreeSet<String> = self
            .selected
            .iter()
            .filter(|tag| vocabulary.binary_search(*tag).is_ok())
            .cloned()
            .collect();

        self.focused = self.focused.min(vocabulary.len().saturating_sub(1));
        self.vocabulary = vocabulary;
        self.selected = selected;
    }

    fn notify(&self, listener: &mut impl FilterListener) {
        let selected = self.selected_tags();
        listener.filter_changed(&self.search_text, &selected);
    }
}

fn normalize(mut tags: Vec<String>) -> Vec<String> {
    tags.sort();
    tags.dedup();
    tags
}
