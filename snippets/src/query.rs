use crate::snippet::Snippet;
use std::ops::Range;

/// Filter criteria for a snippet list: free-form search text plus selected tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetQuery {
    pub search: String,
    pub tags: Vec<String>,
}

impl SnippetQuery {
    pub fn new(search: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            search: search.into(),
            tags,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.tags.is_empty()
    }

    /// Check whether a snippet satisfies this query.
    ///
    /// Search text matches case-insensitively against name, description,
    /// language and code. When tags are selected the snippet must carry at
    /// least one of them.
    pub fn matches(&self, snippet: &Snippet) -> bool {
        self.matches_search(snippet) && self.matches_tags(snippet)
    }

    fn matches_search(&self, snippet: &Snippet) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        let contains = |text: &str| text.to_lowercase().contains(&needle);

        contains(&snippet.name)
            || contains(&snippet.description)
            || contains(&snippet.language)
            || snippet.code.iter().any(|line| contains(line))
    }

    fn matches_tags(&self, snippet: &Snippet) -> bool {
        self.tags.is_empty() || self.tags.iter().any(|tag| snippet.has_tag(tag))
    }
}

/// Byte ranges of every non-overlapping, case-insensitive occurrence of
/// `needle` in `haystack`. Ranges always fall on char boundaries.
pub fn match_ranges(haystack: &str, needle: &str) -> Vec<Range<usize>> {
    if needle.is_empty() {
        return Vec::new();
    }

    let needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    let mut ranges = Vec::new();
    let mut pos = 0;

    while pos < haystack.len() {
        let rest = &haystack[pos..];
        if let Some(len) = match_prefix(rest, &needle) {
            ranges.push(pos..pos + len);
            pos += len;
        } else {
            pos += rest.chars().next().map_or(1, char::len_utf8);
        }
    }

    ranges
}

/// Length in bytes of the prefix of `text` that lowercases to `needle`
fn match_prefix(text: &str, needle: &[char]) -> Option<usize> {
    let mut lowered = text
        .char_indices()
        .flat_map(|(i, c)| c.to_lowercase().map(move |l| (i + c.len_utf8(), l)));

    let mut end = 0;
    for expected in needle {
        let (next_end, c) = lowered.next()?;
        if c != *expected {
            return None;
        }
        end = next_end;
    }
    Some(end)
}
