//! Listing page - the project directory.
//!
//! Category and status menus on top, a lazily extended grid of flip cards
//! below. All page state lives in one [`ListingState`] signal; the rendered
//! [`ListingView`] is derived from it with `use_memo`, which also changes on
//! every new session or cursor so the observer is re-armed.

use dioxus::prelude::*;
use ecodir_core::{status_tags, ListingState, ListingView, Status, Tag};
use ecodir_ui::TagSelector;

use crate::components::viewport::{wait_until_visible, LAST_SLOT_SELECTOR};
use crate::components::{EmptyState, ProjectCard};
use crate::context::{use_catalog, use_page_size, use_translations};

/// Directory page component.
#[component]
pub fn ListingPage() -> Element {
    let catalog = use_catalog();
    let t = use_translations();
    let page_size = use_page_size();

    let mut state: Signal<ListingState> = use_signal(move || ListingState::new(page_size));

    // Recomputed whenever filters or cursor change
    let view: Memo<ListingView> = use_memo({
        let catalog = catalog.clone();
        move || state.read().snapshot(&catalog)
    });

    // Pending "last item visible" watch for the current render
    let mut watcher: Signal<Option<Task>> = use_signal(|| None);

    // Re-arm the observer on the new last item after every view change
    use_effect(move || {
        let current = view().listing;

        if let Some(task) = watcher.write().take() {
            task.cancel();
        }

        let Some(ticket) = state.write().observe(&current) else {
            tracing::trace!(rendered = current.len(), "Listing exhausted, not observing");
            return;
        };

        let task = spawn(async move {
            if wait_until_visible(LAST_SLOT_SELECTOR).await {
                state.write().on_last_item_visible(ticket);
            }
        });
        watcher.set(Some(task));
    });

    let select_tag = move |tag: Tag| {
        state.write().select_tag(tag);
    };

    let select_status = move |tag: Tag| {
        state.write().select_status(Status::from_tag_value(&tag.value));
    };

    let current = view.read();

    rsx! {
        main { class: "directory",
            // Intro
            h1 { class: "directory-title", "{t.common.title_main}" }
            p { class: "directory-subtitle", "{t.common.subtitle_main}" }
            p { class: "directory-community", "{t.common.community_driven}" }

            // Filters
            section { class: "directory-filters",
                div { class: "filter-group filter-group--category",
                    h2 { class: "filter-title", "{t.common.category}" }
                    TagSelector {
                        tags: catalog.tags.clone(),
                        initial_value: catalog.all_tag().clone(),
                        translations: t.clone(),
                        aria_label: t.common.category.clone(),
                        on_change: select_tag,
                    }
                }
                div { class: "filter-group filter-group--status",
                    h2 { class: "filter-title", "{t.common.status}" }
                    TagSelector {
                        tags: status_tags(),
                        initial_value: Status::All.to_tag(),
                        translations: t.clone(),
                        aria_label: t.common.status.clone(),
                        on_change: select_status,
                    }
                }
            }

            // Projects
            if current.listing.is_empty() {
                EmptyState {
                    title: t.common.no_project.clone(),
                    hint: t.common.maybe_yours.clone(),
                }
            } else {
                div { class: "project-grid",
                    for (index, display) in current.listing.items.iter().enumerate() {
                        div {
                            key: "project-{display.project.name}",
                            class: "project-slot",
                            ProjectCard {
                                project: display.clone(),
                                is_flipped: state.read().is_expanded(index),
                                translations: t.clone(),
                                on_click: move |_| state.write().expand_or_collapse(index),
                            }
                        }
                    }
                }
            }
        }
    }
}
