//! Router, handlers, and error mapping for the task API.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post, put};
use serde_json::json;
use todo_core::{NewTask, Task, TaskError, TaskId};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::store::{self, TaskRepository};

#[derive(Clone)]
pub struct AppState {
    pub repo: TaskRepository,
}

/// Error type returned by the API handlers, rendered as a JSON
/// `{"message": …}` body with the matching status code.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Task not found with id {0}")]
    NotFound(TaskId),
    #[error(transparent)]
    InvalidTask(#[from] TaskError),
    #[error("internal server error")]
    Internal(#[source] store::Error),
}

impl From<store::Error> for ApiError {
    fn from(err: store::Error) -> Self {
        match err {
            store::Error::NotFound(id) => Self::NotFound(id),
            other => Self::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidTask(_) => StatusCode::BAD_REQUEST,
            Self::Internal(source) => {
                tracing::error!(error = %source, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

/// Builds the `/api/tasks` router. Layers that depend on configuration
/// (CORS) are applied by [`start_web_server`].
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/tasks/create", post(create_task_handler))
        .route("/api/tasks/gettask", get(recent_tasks_handler))
        .route(
            "/api/tasks/{id}",
            get(get_task_handler).delete(delete_task_handler),
        )
        .route("/api/tasks/{id}/complete", put(complete_task_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tracing::instrument(skip(config))]
pub async fn start_web_server(config: Config) -> anyhow::Result<()> {
    let repo = TaskRepository::open(&config.database_path)?;
    let cors = CorsLayer::new()
        .allow_origin(config.allowed_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);
    let app = router(AppState { repo }).layer(cors);

    let server_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&server_address).await?;
    tracing::info!("Task API running on http://{}", server_address);
    axum::serve(listener, app).await?;
    Ok(())
}

#[tracing::instrument(skip(state))]
async fn create_task_handler(
    State(state): State<AppState>,
    Json(new_task): Json<NewTask>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    todo_core::validate_title(&new_task.title)?;
    let task = state.repo.insert(&new_task)?;
    tracing::info!(task_id = task.id, "created task");
    Ok((StatusCode::CREATED, Json(task)))
}

#[tracing::instrument(skip(state))]
async fn recent_tasks_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.repo.recent_incomplete()?;
    Ok(Json(tasks))
}

#[tracing::instrument(skip(state))]
async fn get_task_handler(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<Json<Task>, ApiError> {
    let task = state.repo.find(id)?.ok_or(ApiError::NotFound(id))?;
    Ok(Json(task))
}

#[tracing::instrument(skip(state))]
async fn complete_task_handler(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<Json<Task>, ApiError> {
    let task = state.repo.mark_completed(id)?;
    tracing::info!(task_id = id, "marked task completed");
    Ok(Json(task))
}

#[tracing::instrument(skip(state))]
async fn delete_task_handler(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<StatusCode, ApiError> {
    state.repo.delete(id)?;
    tracing::info!(task_id = id, "deleted task");
    Ok(StatusCode::NO_CONTENT)
}
