pub mod logs_screen;
pub mod snippets_screen;

use crate::state::{LogsState, SnippetsState};

#[derive(Debug, Clone)]
pub enum Screen {
    Snippets(Box<SnippetsState>),
    Logs(LogsState),
}
