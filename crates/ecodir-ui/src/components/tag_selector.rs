//! Tag Selector Component
//!
//! Horizontal, wrapping row of tag pills with radio semantics.
//! The selected pill is filled; the others show a faint border.

use std::sync::Arc;

use dioxus::prelude::*;
use ecodir_core::{Tag, TagSelection, Translations};

/// Properties for the TagSelector component
#[derive(Clone, PartialEq, Props)]
pub struct TagSelectorProps {
    /// Tags to render, in display order
    pub tags: Vec<Tag>,
    /// Tag selected on first render
    pub initial_value: Tag,
    /// Called with the newly selected tag on every click
    pub on_change: EventHandler<Tag>,
    /// Label lookup; falls back to each tag's own label
    pub translations: Arc<Translations>,
    /// Accessible name of the group
    #[props(default = "Tag selection".to_string())]
    pub aria_label: String,
}

/// Class for a pill in the given state
pub fn pill_class(selected: bool) -> &'static str {
    if selected {
        "pill selected"
    } else {
        "pill"
    }
}

/// Displays a row of selectable tag pills
///
/// The selection is local to the component and seeded from
/// `initial_value`; the owner learns about changes through `on_change`.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TagSelector {
///         tags: catalog.tags.clone(),
///         initial_value: catalog.all_tag().clone(),
///         translations: translations.clone(),
///         on_change: move |tag| {
///             state.write().select_tag(tag);
///         },
///     }
/// }
/// ```
#[component]
pub fn TagSelector(props: TagSelectorProps) -> Element {
    let initial = props.initial_value.clone();
    let mut selection = use_signal(move || TagSelection::new(initial));

    rsx! {
        div {
            class: "tag-selector",
            role: "radiogroup",
            "aria-label": "{props.aria_label}",
            // Measured only once the element is attached
            onmounted: move |evt: MountedEvent| async move {
                match evt.get_client_rect().await {
                    Ok(rect) => tracing::trace!(height = rect.size.height, "Tag menu mounted"),
                    Err(e) => tracing::debug!("Tag menu not measurable: {:?}", e),
                }
            },
            for tag in props.tags.iter() {
                {
                    let tag_clone = tag.clone();
                    let is_selected = selection.read().is_selected(tag);
                    let label = props.translations.tag_label(tag).to_string();
                    let on_change = props.on_change;
                    rsx! {
                        button {
                            key: "{tag.value}",
                            class: pill_class(is_selected),
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| {
                                let picked = selection.write().click(tag_clone.clone());
                                on_change.call(picked);
                            },
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
