use serde::{Deserialize, Serialize};

/// A single saved code snippet.
///
/// Stored on disk as one JSON document per file. `code` keeps the snippet
/// as a list of lines so it can be rendered without re-splitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub language: String,
    pub code: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Snippet {
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            language: language.into(),
            code: Vec::new(),
            id: None,
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_code<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.code = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Full source text with lines joined by `\n`
    pub fn source(&self) -> String {
        self.code.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_minimal_snippet() {
        let json = r#"{"name":"fib","language":"Python","code":["def fib(n):","    pass"]}"#;
        let snippet: Snippet = serde_json::from_str(json).unwrap();

        assert_eq!(snippet.name, "fib");
        assert_eq!(snippet.description, "");
        assert_eq!(snippet.id, None);
        assert!(snippet.tags.is_empty());
        assert_eq!(snippet.source(), "def fib(n):\n    pass");
    }

    #[test]
    fn deserialize_full_snippet() {
        let json = r#"{
            "name": "read csv",
            "description": "load a frame",
            "language": "Python",
            "code": ["import pandas as pd"],
            "id": 7,
            "tags": ["pandas", "io"]
        }"#;
        let snippet: Snippet = serde_json::from_str(json).unwrap();

        assert_eq!(snippet.id, Some(7));
        assert!(snippet.has_tag("io"));
        assert!(!snippet.has_tag("IO"));
    }
}
