//! Thin HTTP client for the task REST API.
//!
//! Each operation performs exactly one outbound request. There are no
//! retries, no caching, and no timeout overrides beyond transport defaults;
//! failures propagate unchanged to the caller, which decides whether to
//! surface or log them.

use reqwest::{Response, StatusCode};
use thiserror::Error;
use todo_core::{NewTask, Task, TaskId};

/// Base URL of the task API when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/tasks";

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Transport-level failure: connection refused, DNS, malformed body.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Server(StatusCode),
}

/// HTTP client for the `/api/tasks` endpoints.
#[derive(Debug, Clone)]
pub struct TaskService {
    client: reqwest::Client,
    base_url: String,
}

impl Default for TaskService {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl TaskService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// POST `{base}/create`. Title validation is the form's responsibility,
    /// not this client's.
    pub async fn create_task(&self, new_task: &NewTask) -> Result<Task, ServiceError> {
        let response = self
            .client
            .post(self.endpoint("/create"))
            .json(new_task)
            .send()
            .await?;
        let task = check_status(response)?.json().await?;
        Ok(task)
    }

    /// GET `{base}/gettask`. Returns whatever the server considers recent,
    /// in server order.
    pub async fn recent_tasks(&self) -> Result<Vec<Task>, ServiceError> {
        let response = self.client.get(self.endpoint("/gettask")).send().await?;
        let tasks = check_status(response)?.json().await?;
        Ok(tasks)
    }

    /// PUT `{base}/{id}/complete`. Returns the updated record.
    pub async fn complete_task(&self, id: TaskId) -> Result<Task, ServiceError> {
        let response = self
            .client
            .put(self.endpoint(&format!("/{id}/complete")))
            .send()
            .await?;
        let task = check_status(response)?.json().await?;
        Ok(task)
    }

    /// DELETE `{base}/{id}`. Not reachable from the UI.
    pub async fn delete_task(&self, id: TaskId) -> Result<(), ServiceError> {
        let response = self
            .client
            .delete(self.endpoint(&format!("/{id}")))
            .send()
            .await?;
        check_status(response)?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn check_status(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::debug!(%status, url = %response.url(), "task api returned an error status");
        Err(ServiceError::Server(status))
    }
}
