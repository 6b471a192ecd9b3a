use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Server-assigned task identifier. Opaque to the client.
pub type TaskId = i64;

/// Shown on a card when a task has no description.
pub const NO_DESCRIPTION_PLACEHOLDER: &str = "No description provided";

/// A unit of work: titled, optionally described, completable.
///
/// The client treats this as a read-only projection of server state; every
/// visible change comes from re-fetching the list after a mutating call.
/// Wire names are camelCase (`createdAt`) to match the REST contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: NaiveDateTime,
}

impl Task {
    /// The description to render: the stored text, or a fixed placeholder
    /// when the description is absent or empty.
    pub fn display_description(&self) -> &str {
        match self.description.as_deref() {
            Some(description) if !description.is_empty() => description,
            _ => NO_DESCRIPTION_PLACEHOLDER,
        }
    }

    /// Human-readable creation timestamp, e.g. `Jan 15, 2024, 10:30 AM`.
    pub fn format_created_at(&self) -> String {
        self.created_at.format("%b %-d, %Y, %I:%M %p").to_string()
    }
}

/// Request body for creating a task: `{title, description}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Task title cannot be empty")]
    EmptyTitle,
}

/// A title is valid when it is non-empty after trimming whitespace.
///
/// The form runs this before invoking the create callback; the server runs it
/// again on the create endpoint.
pub fn validate_title(title: &str) -> Result<(), TaskError> {
    if title.trim().is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task_created_at(description: Option<&str>) -> Task {
        Task {
            id: 1,
            title: "Write report".to_string(),
            description: description.map(str::to_string),
            completed: false,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn empty_title_is_rejected() {
        assert_eq!(validate_title(""), Err(TaskError::EmptyTitle));
    }

    #[test]
    fn whitespace_only_title_is_rejected() {
        assert_eq!(validate_title("   \t "), Err(TaskError::EmptyTitle));
    }

    #[test]
    fn title_with_surrounding_whitespace_is_accepted() {
        assert_eq!(validate_title("  Buy milk  "), Ok(()));
    }

    #[test]
    fn missing_description_renders_placeholder() {
        let task = task_created_at(None);
        assert_eq!(task.display_description(), NO_DESCRIPTION_PLACEHOLDER);
    }

    #[test]
    fn empty_description_renders_placeholder() {
        let task = task_created_at(Some(""));
        assert_eq!(task.display_description(), NO_DESCRIPTION_PLACEHOLDER);
    }

    #[test]
    fn present_description_is_rendered_verbatim() {
        let task = task_created_at(Some("quarterly numbers"));
        assert_eq!(task.display_description(), "quarterly numbers");
    }

    #[test]
    fn created_at_formats_like_the_card_expects() {
        let task = task_created_at(None);
        assert_eq!(task.format_created_at(), "Jan 15, 2024, 10:30 AM");
    }

    #[test]
    fn afternoon_times_use_pm() {
        let mut task = task_created_at(None);
        task.created_at = NaiveDate::from_ymd_opt(2024, 3, 2)
            .unwrap()
            .and_hms_opt(16, 5, 0)
            .unwrap();
        assert_eq!(task.format_created_at(), "Mar 2, 2024, 04:05 PM");
    }

    #[test]
    fn task_serializes_with_camel_case_wire_names() {
        let task = task_created_at(Some("quarterly numbers"));
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "Write report",
                "description": "quarterly numbers",
                "completed": false,
                "createdAt": "2024-01-15T10:30:00",
            })
        );
    }

    #[test]
    fn task_deserializes_from_the_backend_wire_form() {
        let task: Task = serde_json::from_str(
            r#"{"id":7,"title":"Buy milk","description":null,"completed":true,"createdAt":"2024-01-15T11:30:00"}"#,
        )
        .unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, None);
        assert!(task.completed);
    }

    #[test]
    fn new_task_defaults_missing_description_to_empty() {
        let new_task: NewTask = serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();
        assert_eq!(new_task.description, "");
    }
}
