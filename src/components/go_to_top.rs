//! Go-To-Top Component

use leptos::prelude::*;

use crate::navigation;

/// Floating button that smooth-scrolls back to the top. Visibility is
/// driven by the shared scroll chrome.
#[component]
pub fn GoToTop(visible: ReadSignal<bool>) -> impl IntoView {
    view! {
        <button
            id="go-to-top"
            class=move || if visible.get() { "go-to-top visible" } else { "go-to-top" }
            aria-label="回到頂端"
            on:click=move |_| navigation::scroll_to_top()
        >
            "↑"
        </button>
    }
}
