use dioxus::prelude::*;
use todo_core::NewTask;

use crate::state::use_task_store;

/// Shown when the trimmed title is empty; the create call is never made.
pub const TITLE_REQUIRED: &str = "Title is required";
/// Shown when the create call fails; fields keep their contents for retry.
pub const CREATE_FAILED: &str = "Failed to create task. Please try again.";

/// Form for creating a task. Validation and its inline error are local to
/// the form, distinct from the page-level banner.
#[component]
pub fn TaskForm() -> Element {
    let store = use_task_store();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        if todo_core::validate_title(&title()).is_err() {
            error.set(Some(TITLE_REQUIRED.to_string()));
            return;
        }

        spawn(async move {
            // The title is sent untrimmed; only the validation trims.
            let new_task = NewTask {
                title: title(),
                description: description(),
            };
            match store.create(new_task).await {
                Ok(()) => {
                    title.set(String::new());
                    description.set(String::new());
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to create task");
                    error.set(Some(CREATE_FAILED.to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "task-form-container",
            h2 { "Create New Task" }
            if let Some(message) = error() {
                div { class: "error-message", "{message}" }
            }
            form { class: "task-form", onsubmit: handle_submit,
                div { class: "form-group",
                    label { r#for: "title", "Title *" }
                    input {
                        r#type: "text",
                        id: "title",
                        class: "form-input",
                        value: "{title}",
                        oninput: move |evt| title.set(evt.value()),
                        placeholder: "Enter task title",
                    }
                }
                div { class: "form-group",
                    label { r#for: "description", "Description" }
                    textarea {
                        id: "description",
                        class: "form-textarea",
                        rows: "4",
                        value: "{description}",
                        oninput: move |evt| description.set(evt.value()),
                        placeholder: "Enter task description",
                    }
                }
                button { r#type: "submit", class: "btn-primary", "Create Task" }
            }
        }
    }
}
