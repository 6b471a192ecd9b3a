//! Dioxus web client for the Todo Task Manager.
//!
//! The application root installs the [`state::TaskStore`] context and the
//! stylesheet; everything below it reads the store and renders.

pub mod components;
pub mod state;
pub mod views;

use dioxus::prelude::*;
use todo_client::TaskService;

static CSS: Asset = asset!("assets/main.css");

#[component]
pub fn App() -> Element {
    state::provide_task_store(TaskService::default());

    rsx! {
        document::Stylesheet { href: CSS }
        components::Header {}
        views::Home {}
    }
}
