//! Project Card Component
//!
//! Flip card: identity on the front, description and links on the back.

use std::sync::Arc;

use dioxus::prelude::*;
use ecodir_core::{DisplayProject, Translations};
use ecodir_ui::StatusBadge;

/// Class for the card container
pub fn flip_class(is_flipped: bool) -> &'static str {
    if is_flipped {
        "flip-card flipped"
    } else {
        "flip-card"
    }
}

/// Flip card for one directory entry
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ProjectCard {
///         project: display,
///         is_flipped: state.read().is_expanded(index),
///         translations: t.clone(),
///         on_click: move |_| state.write().expand_or_collapse(index),
///     }
/// }
/// ```
#[component]
pub fn ProjectCard(
    /// Project with resolved tags
    project: DisplayProject,
    /// Show the back face
    #[props(default = false)]
    is_flipped: bool,
    translations: Arc<Translations>,
    /// Called when the card is clicked
    on_click: EventHandler<()>,
) -> Element {
    let t = translations.clone();
    let info = &project.project;
    let initial = info.initial();

    rsx! {
        div {
            class: flip_class(is_flipped),
            role: "button",
            tabindex: "0",
            "aria-pressed": if is_flipped { "true" } else { "false" },
            onclick: move |_| on_click.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Enter {
                    on_click.call(());
                }
            },

            div { class: "flip-card__inner",
                // Front: identity
                div { class: "flip-card__face",
                    if let Some(logo) = &info.logo {
                        img { class: "card-logo", src: "{logo}", alt: "{info.name}" }
                    } else {
                        div { class: "card-logo card-logo--placeholder", "{initial}" }
                    }
                    h3 { class: "card-name", "{info.name}" }
                    StatusBadge {
                        status: info.status(),
                        live_label: t.common.live.clone(),
                        testnet_label: t.common.testnet.clone(),
                    }
                    div { class: "card-tags",
                        for tag in project.tags_ref.iter() {
                            {
                                let label = t.tag_label(tag).to_string();
                                rsx! {
                                    span { key: "{tag.value}", class: "card-tag", "{label}" }
                                }
                            }
                        }
                    }
                    p { class: "card-hint", "{t.common.flip_hint}" }
                }

                // Back: details
                div { class: "flip-card__face flip-card__face--back",
                    h3 { class: "card-name", "{info.name}" }
                    p { class: "card-description", "{info.description}" }
                    div { class: "card-links",
                        if let Some(url) = &info.website {
                            CardLink { href: url.clone(), label: t.common.website.clone() }
                        }
                        if let Some(url) = &info.twitter {
                            CardLink { href: url.clone(), label: t.common.twitter.clone() }
                        }
                        if let Some(url) = &info.github {
                            CardLink { href: url.clone(), label: t.common.github.clone() }
                        }
                    }
                }
            }
        }
    }
}

/// External link that does not flip the card
#[component]
fn CardLink(href: String, label: String) -> Element {
    rsx! {
        a {
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            onclick: move |evt: MouseEvent| evt.stop_propagation(),
            "{label}"
        }
    }
}
