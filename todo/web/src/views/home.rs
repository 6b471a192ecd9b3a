use dioxus::prelude::*;

use crate::components::{ErrorMessage, LoadingSpinner, TaskForm, TaskList};
use crate::state::use_task_store;

/// The single page of the application: form on one side, recent tasks on
/// the other, with a page-level banner for load/complete failures.
#[component]
pub fn Home() -> Element {
    let store = use_task_store();
    let tasks = store.tasks;
    let loading = store.loading;
    let error = store.error;

    // Initial load of the task list
    use_effect(move || {
        spawn(async move {
            store.load().await;
        });
    });

    rsx! {
        main { class: "app-main",
            if let Some(message) = error() {
                ErrorMessage { message }
            }
            div { class: "content-grid",
                TaskForm {}
                if loading() {
                    LoadingSpinner { message: "Loading tasks...".to_string() }
                } else {
                    TaskList {
                        tasks: tasks(),
                        on_task_completed: move |id| {
                            spawn(async move {
                                store.complete(id).await;
                            });
                        },
                    }
                }
            }
        }
    }
}
