//! Single-owner queue of deferred form tasks.

use std::future::Future;

use tokio_util::task::TaskTracker;

/// Queue of spawned validation tasks.
///
/// Every task yields to the scheduler once before running its body, so work
/// enqueued by a change never resolves inside the call that caused it.
/// Tasks resolve in whatever order the runtime drives them; callers that need
/// a quiescent form await [`settle`](Self::settle).
///
/// Tasks run detached from any caller: dropping a `settle` future or the
/// queue itself never aborts them. Spawning requires a running tokio runtime.
#[derive(Clone)]
pub struct TaskQueue {
    tracker: TaskTracker,
}

impl TaskQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        let tracker = TaskTracker::new();
        // Closed trackers still accept tasks; `wait` then resolves whenever
        // the queue drains.
        tracker.close();
        Self { tracker }
    }

    /// Enqueue a task.
    pub fn spawn<F>(&self, label: &'static str, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        log::trace!("enqueue {}", label);
        self.tracker.spawn(async move {
            tokio::task::yield_now().await;
            task.await;
        });
    }

    /// Number of tasks that have not resolved yet.
    pub fn pending(&self) -> usize {
        self.tracker.len()
    }

    /// Wait until every task, including ones enqueued while waiting, has
    /// resolved. Safe to drop before completion.
    pub async fn settle(&self) {
        self.tracker.wait().await;
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskQueue")
            .field("pending", &self.pending())
            .finish()
    }
}
