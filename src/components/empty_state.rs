//! Placeholder shown when no project matches the filters.

use dioxus::prelude::*;

#[component]
pub fn EmptyState(title: String, hint: String) -> Element {
    rsx! {
        div { class: "empty-state",
            p { class: "empty-state__title", "{title}" }
            p { class: "empty-state__hint", "{hint}" }
        }
    }
}
