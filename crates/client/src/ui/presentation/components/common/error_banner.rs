//! Dismissible error banner for retryable failures.

use dioxus::prelude::*;

/// Error banner with a dismiss affordance
#[component]
pub fn ErrorBanner(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "flex justify-between items-center px-4 py-3 bg-red-500/10 border border-red-500/30 text-red-500 text-sm rounded",

            span { "{message}" }

            button {
                onclick: move |_| on_dismiss.call(()),
                class: "px-2 bg-transparent text-red-400 border-none cursor-pointer text-lg",
                "×"
            }
        }
    }
}
