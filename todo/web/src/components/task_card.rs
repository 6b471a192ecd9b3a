use dioxus::prelude::*;
use todo_core::{Task, TaskId};

/// A single task: title, creation time, description (or placeholder), and
/// the Done control, which reports the task's id back up the tree.
#[component]
pub fn TaskCard(task: Task, on_task_completed: EventHandler<TaskId>) -> Element {
    let task_id = task.id;

    rsx! {
        div { class: "task-card",
            div { class: "task-card-header",
                h3 { class: "task-title", "{task.title}" }
                span { class: "task-date", "{task.format_created_at()}" }
            }
            p { class: "task-description", "{task.display_description()}" }
            div { class: "task-card-footer",
                button {
                    class: "btn-done",
                    onclick: move |_| on_task_completed.call(task_id),
                    "Done"
                }
            }
        }
    }
}
