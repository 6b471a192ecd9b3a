use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "app-header",
            h1 { "Todo Task Manager" }
        }
    }
}
