//! Viewport visibility bridge.
//!
//! Wraps a one-shot `IntersectionObserver` in the webview: the observer
//! watches a single element, disconnects on the first intersection and
//! reports back once. Arming a new watch disconnects the previous one.

use dioxus::prelude::*;

/// The last rendered slot of the project grid
pub const LAST_SLOT_SELECTOR: &str = ".project-grid > .project-slot:last-child";

const OBSERVE_ONCE_JS: &str = r#"
if (window.__ecodirObserver) {
    window.__ecodirObserver.disconnect();
    window.__ecodirObserver = null;
}
const target = document.querySelector("__SELECTOR__");
if (!target) {
    dioxus.send(false);
} else {
    const observer = new IntersectionObserver((entries) => {
        if (entries.some((entry) => entry.isIntersecting)) {
            observer.disconnect();
            window.__ecodirObserver = null;
            dioxus.send(true);
        }
    });
    window.__ecodirObserver = observer;
    observer.observe(target);
}
"#;

/// Build the observer script for `selector`
pub fn observe_script(selector: &str) -> String {
    OBSERVE_ONCE_JS.replace("__SELECTOR__", selector)
}

/// Resolve once the element matching `selector` enters the viewport.
///
/// Returns `false` if the element does not exist or the webview dropped the
/// observer.
pub async fn wait_until_visible(selector: &str) -> bool {
    let mut eval = document::eval(&observe_script(selector));
    match eval.recv::<bool>().await {
        Ok(visible) => visible,
        Err(e) => {
            tracing::debug!("Viewport observer closed: {:?}", e);
            false
        }
    }
}
