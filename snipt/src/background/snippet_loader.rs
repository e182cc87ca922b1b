use crate::events::DataEvent;
use snippets::SnippetLibrary;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Reads the snippet library from disk and reports back over the data channel
#[derive(Clone)]
pub struct SnippetLoader {
    pub snippets_dir: PathBuf,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl SnippetLoader {
    pub fn new(snippets_dir: PathBuf, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self {
            snippets_dir,
            data_tx,
        }
    }

    pub async fn load_snippets(&self) {
        tracing::info!("Loading snippets from {}", self.snippets_dir.display());

        let event = match SnippetLibrary::load_dir(&self.snippets_dir).await {
            Ok(library) => DataEvent::SnippetsLoaded { library },
            Err(e) => {
                tracing::error!("Failed to load snippet library: {}", e);
                DataEvent::LoadError {
                    error: e.to_string(),
                }
            }
        };

        // Receiver only disappears during shutdown
        let _ = self.data_tx.send(event);
    }
}
