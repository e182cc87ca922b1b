pub mod snippet_loader;

use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

/// Owns the spawned loading tasks so they can be replaced or aborted
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Spawn a background task under `task_id`.
    /// A still-running task with the same id is aborted first so stale
    /// results never arrive after fresh ones.
    pub fn spawn_load_task<F>(&mut self, task_id: impl Into<String>, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let task_id = task_id.into();
        if let Some(handle) = self.tasks.remove(&task_id) {
            if !handle.is_finished() {
                tracing::debug!("Aborting previous task {}", task_id);
            }
            handle.abort();
        }

        self.tasks.insert(task_id, tokio::spawn(future));
    }

    pub fn running(&self) -> usize {
        self.tasks.values().filter(|h| !h.is_finished()).count()
    }

    /// Cancel all running tasks (used on shutdown)
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
