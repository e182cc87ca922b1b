use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnippetError {
    #[error("Snippet directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Failed to parse snippet {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
