use dioxus::prelude::*;

use crate::context::get_directory;
use crate::pages::ListingPage;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the directory context.
#[component]
pub fn App() -> Element {
    use_context_provider(get_directory);

    rsx! {
        style { {GLOBAL_STYLES} }
        ListingPage {}
    }
}
