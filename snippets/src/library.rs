use crate::error::SnippetError;
use crate::query::SnippetQuery;
use crate::snippet::Snippet;
use itertools::Itertools;
use std::path::{Path, PathBuf};

/// An ordered collection of snippets loaded from disk
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnippetLibrary {
    snippets: Vec<Snippet>,
}

impl SnippetLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a library from snippets already in memory.
    ///
    /// Snippets are ordered by id (snippets without an id last), then by name.
    pub fn from_snippets(mut snippets: Vec<Snippet>) -> Self {
        snippets.sort_by(|a, b| {
            let a_key = (a.id.is_none(), a.id, &a.name);
            let b_key = (b.id.is_none(), b.id, &b.name);
            a_key.cmp(&b_key)
        });
        Self { snippets }
    }

    /// Load every `*.json` snippet file in `dir`.
    ///
    /// Files that fail to parse are skipped with a warning so one broken
    /// snippet never hides the rest of the library.
    pub async fn load_dir(dir: impl AsRef<Path>) -> Result<Self, SnippetError> {
        let dir = dir.as_ref();
        if !tokio::fs::try_exists(dir).await? {
            return Err(SnippetError::MissingDirectory(dir.to_path_buf()));
        }

        let mut paths: Vec<PathBuf> = Vec::new();
        let mut entries = tokio::fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut snippets = Vec::with_capacity(paths.len());
        for path in paths {
            match Self::load_file(&path).await {
                Ok(snippet) => snippets.push(snippet),
                Err(e) => tracing::warn!("Skipping snippet file: {}", e),
            }
        }

        tracing::debug!("Loaded {} snippets from {}", snippets.len(), dir.display());
        Ok(Self::from_snippets(snippets))
    }

    async fn load_file(path: &Path) -> Result<Snippet, SnippetError> {
        let json = tokio::fs::read_to_string(path).await?;
        serde_json::from_str(&json).map_err(|source| SnippetError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Distinct tags used across the library, sorted
    pub fn vocabulary(&self) -> Vec<String> {
        self.snippets
            .iter()
            .flat_map(|s| s.tags.iter())
            .sorted()
            .dedup()
            .cloned()
            .collect()
    }

    /// Positions of the snippets matching `query`, in library order
    pub fn matching_indices(&self, query: &SnippetQuery) -> Vec<usize> {
        self.snippets
            .iter()
            .positions(|snippet| query.matches(snippet))
            .collect()
    }
}
