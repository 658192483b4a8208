pub mod data_loader;

use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

/// Manages background tasks for data loading
/// Tracks running tasks and provides cancellation support
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Spawn a background data loading task
    /// If a task with the same ID already exists, it will be cancelled first
    pub fn spawn_load_task<F>(&mut self, task_id: String, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // A superseded fetch is aborted; its result would be discarded anyway
        if let Some(handle) = self.tasks.remove(&task_id) {
            if !handle.is_finished() {
                tracing::debug!("Aborting superseded task {}", task_id);
            }
            handle.abort();
        }

        let handle = tokio::spawn(future);
        self.tasks.insert(task_id, handle);
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_spawn_with_same_id_aborts_previous() {
        let mut manager = BackgroundTaskManager::new();
        let (tx, mut rx) = mpsc::unbounded_channel();

        let slow_tx = tx.clone();
        manager.spawn_load_task("load_products".to_string(), async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            let _ = slow_tx.send("slow");
        });
        manager.spawn_load_task("load_products".to_string(), async move {
            let _ = tx.send("fast");
        });

        assert_eq!(rx.recv().await, Some("fast"));
        // Both senders are gone once the slow task is aborted
        assert_eq!(rx.recv().await, None);
    }
}
