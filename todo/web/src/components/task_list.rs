use dioxus::prelude::*;
use todo_core::{Task, TaskId};

use crate::components::TaskCard;

/// The recent-task list. Pure function of its props: tasks render one card
/// each in exactly the order received, with no sorting or filtering.
#[component]
pub fn TaskList(tasks: Vec<Task>, on_task_completed: EventHandler<TaskId>) -> Element {
    rsx! {
        div { class: "task-list-container",
            h2 { "Recent Tasks" }
            if tasks.is_empty() {
                div { class: "empty-state",
                    p { "No tasks available. Create your first task!" }
                }
            } else {
                div { class: "task-list",
                    {tasks.iter().map(|task| rsx! {
                        TaskCard {
                            key: "{task.id}",
                            task: task.clone(),
                            on_task_completed,
                        }
                    })}
                }
            }
        }
    }
}
