mod error;
pub mod library;
pub mod query;
pub mod snippet;

pub use crate::error::SnippetError;
pub use library::SnippetLibrary;
pub use query::{match_ranges, SnippetQuery};
pub use snippet::Snippet;
