//! Rendering properties of the pure components, checked by rendering them
//! to HTML strings.

use chrono::NaiveDate;
use dioxus::prelude::*;
use todo_core::{Task, TaskId};
use todo_web::App;
use todo_web::components::{TaskCard, TaskList};

fn sample_task(id: TaskId, title: &str, description: Option<&str>) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: description.map(str::to_string),
        completed: false,
        created_at: NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap(),
    }
}

#[component]
fn ListHarness(tasks: Vec<Task>) -> Element {
    rsx! {
        TaskList { tasks, on_task_completed: move |_: TaskId| {} }
    }
}

#[component]
fn CardHarness(task: Task) -> Element {
    rsx! {
        TaskCard { task, on_task_completed: move |_: TaskId| {} }
    }
}

fn render_list(tasks: Vec<Task>) -> String {
    let mut dom = VirtualDom::new_with_props(ListHarness, ListHarnessProps { tasks });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn render_card(task: Task) -> String {
    let mut dom = VirtualDom::new_with_props(CardHarness, CardHarnessProps { task });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn card_count(html: &str) -> usize {
    html.matches("class=\"task-card\"").count()
}

#[test]
fn empty_list_shows_the_empty_state_and_no_cards() {
    let html = render_list(vec![]);

    assert!(html.contains("No tasks available. Create your first task!"));
    assert_eq!(card_count(&html), 0);
}

#[test]
fn list_renders_one_card_per_task_in_the_order_received() {
    let tasks = vec![
        sample_task(1, "First task", None),
        sample_task(2, "Second task", None),
        sample_task(3, "Third task", None),
    ];

    let html = render_list(tasks);

    assert_eq!(card_count(&html), 3);
    assert!(!html.contains("No tasks available"));
    let first = html.find("First task").expect("first task missing");
    let second = html.find("Second task").expect("second task missing");
    let third = html.find("Third task").expect("third task missing");
    assert!(first < second && second < third);
}

#[test]
fn card_shows_title_date_and_description() {
    let html = render_card(sample_task(7, "Write report", Some("quarterly numbers")));

    assert!(html.contains("Write report"));
    assert!(html.contains("Jan 15, 2024, 10:30 AM"));
    assert!(html.contains("quarterly numbers"));
}

#[test]
fn card_without_description_shows_the_placeholder() {
    let html = render_card(sample_task(7, "Buy milk", None));

    assert!(html.contains("No description provided"));
}

#[test]
fn card_with_empty_description_shows_the_placeholder() {
    let html = render_card(sample_task(7, "Buy milk", Some("")));

    assert!(html.contains("No description provided"));
}

#[test]
fn app_renders_the_header_above_the_page_content() {
    let mut dom = VirtualDom::new(App);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    let header = html.find("Todo Task Manager").expect("header missing");
    let form = html.find("Create New Task").expect("form missing");
    assert!(header < form);
}

#[test]
fn card_has_a_done_control() {
    let html = render_card(sample_task(7, "Buy milk", None));

    assert!(html.contains(">Done</button>") || html.contains("Done"));
    assert!(html.contains("btn-done"));
}
