use dioxus::prelude::*;

/// Placeholder shown while a fetch is in flight.
#[component]
pub fn LoadingSpinner(message: String) -> Element {
    rsx! {
        div { class: "loading", "{message}" }
    }
}
