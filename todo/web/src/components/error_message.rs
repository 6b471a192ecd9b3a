use dioxus::prelude::*;

/// Page-level banner for failures that are not the form's to display.
/// Rendering it does not replace the page content below.
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "global-error",
            p { "{message}" }
        }
    }
}
