use super::{AppState, LoadingState};
use crate::events::DataEvent;

/// Pure state transition function for data events
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    match event {
        DataEvent::SnippetsLoaded { library } => {
            tracing::info!(
                "Snippet library loaded: {} snippets, {} tags",
                library.len(),
                library.vocabulary().len()
            );
            let snippets_state = state.snippets_mut();
            snippets_state.replace_library(library);
            snippets_state.loading = LoadingState::Loaded;
        }

        DataEvent::LoadError { error } => {
            tracing::error!("Failed to load snippets: {}", error);
            state.snippets_mut().loading = LoadingState::Error(error);
        }
    }
}
