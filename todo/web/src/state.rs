//! Application-state container for the task list.
//!
//! All mutation of the displayed task collection happens through
//! [`TaskStore`] methods; views read the signals and call back into the
//! store. Every mutating call ends with a full re-fetch, so the rendered
//! list is always a replacement of server truth as of the last successful
//! load.

use dioxus::prelude::*;
use todo_client::{ServiceError, TaskService};
use todo_core::{NewTask, Task, TaskId};

/// Banner text when loading or refreshing the list fails.
pub const LOAD_FAILED: &str = "Failed to load tasks. Please refresh the page.";
/// Banner text when completing a task fails.
pub const COMPLETE_FAILED: &str = "Failed to complete task. Please try again.";

/// Installs the store into context at the application root.
pub fn provide_task_store(service: TaskService) -> TaskStore {
    use_context_provider(|| TaskStore::new(service))
}

/// Reads the store installed by [`provide_task_store`].
pub fn use_task_store() -> TaskStore {
    use_context()
}

/// Copyable handle over the application state signals.
#[derive(Clone, Copy)]
pub struct TaskStore {
    service: Signal<TaskService>,
    pub tasks: Signal<Vec<Task>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    /// Monotonic fetch sequence. Responses older than the last-issued
    /// request are discarded before any state commit, so whichever fetch
    /// was started last determines the rendered list.
    fetch_seq: Signal<u64>,
}

impl TaskStore {
    fn new(service: TaskService) -> Self {
        Self {
            service: Signal::new(service),
            tasks: Signal::new(Vec::new()),
            loading: Signal::new(true),
            error: Signal::new(None),
            fetch_seq: Signal::new(0),
        }
    }

    /// Fetches the recent-task list and replaces the displayed collection.
    ///
    /// The loading flag is released on every exit path by the scoped guard.
    pub async fn load(mut self) {
        let seq = self.next_seq();
        let _loading = LoadingGuard::hold(self.loading, self.fetch_seq, seq);
        let service = (*self.service.peek()).clone();

        match service.recent_tasks().await {
            Ok(tasks) => {
                if self.is_latest(seq) {
                    self.tasks.set(tasks);
                    self.error.set(None);
                } else {
                    tracing::debug!(seq, "discarding stale task list response");
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load tasks");
                if self.is_latest(seq) {
                    self.error.set(Some(LOAD_FAILED.to_string()));
                }
            }
        }
    }

    /// Creates a task, then re-fetches the list. A create failure is the
    /// form's to display, so it propagates instead of touching the banner.
    pub async fn create(self, new_task: NewTask) -> Result<(), ServiceError> {
        let service = (*self.service.peek()).clone();
        service.create_task(&new_task).await?;
        self.load().await;
        Ok(())
    }

    /// Completes a task, then re-fetches the list. Failures are logged and
    /// surfaced in the banner.
    pub async fn complete(mut self, id: TaskId) {
        let service = (*self.service.peek()).clone();
        match service.complete_task(id).await {
            Ok(_) => self.load().await,
            Err(err) => {
                tracing::error!(error = %err, task_id = id, "failed to complete task");
                self.error.set(Some(COMPLETE_FAILED.to_string()));
            }
        }
    }

    fn next_seq(&mut self) -> u64 {
        let mut seq = self.fetch_seq.write();
        *seq += 1;
        *seq
    }

    fn is_latest(&self, seq: u64) -> bool {
        *self.fetch_seq.peek() == seq
    }
}

/// Raises the loading flag for the lifetime of one fetch and clears it on
/// drop, provided the fetch is still the latest one issued.
struct LoadingGuard {
    loading: Signal<bool>,
    fetch_seq: Signal<u64>,
    seq: u64,
}

impl LoadingGuard {
    fn hold(mut loading: Signal<bool>, fetch_seq: Signal<u64>, seq: u64) -> Self {
        loading.set(true);
        Self {
            loading,
            fetch_seq,
            seq,
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if *self.fetch_seq.peek() == self.seq {
            self.loading.set(false);
        }
    }
}
