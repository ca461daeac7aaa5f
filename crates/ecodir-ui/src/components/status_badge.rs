//! Status Badge Component

use dioxus::prelude::*;
use ecodir_core::Status;

/// CSS modifier for a project status
pub fn badge_class(status: Status) -> &'static str {
    match status {
        Status::Live => "badge badge--live",
        Status::Testnet => "badge badge--testnet",
        Status::All => "badge",
    }
}

/// Small rounded marker showing where a project is deployed
///
/// Renders nothing when `status` is `None`.
#[component]
pub fn StatusBadge(status: Option<Status>, live_label: String, testnet_label: String) -> Element {
    let Some(status) = status else {
        return VNode::empty();
    };
    let label = match status {
        Status::Live => live_label,
        Status::Testnet => testnet_label,
        Status::All => return VNode::empty(),
    };

    rsx! {
        span { class: badge_class(status), "{label}" }
    }
}
