//! UI shell: app root and router.

use dioxus::prelude::*;

pub mod presentation;
pub mod routes;

pub use routes::Route;

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Must be created inside an active Dioxus runtime. The service bundle
    // is provided by the composition root (see `src/main.rs`).
    use_context_provider(presentation::state::AuthState::new);

    rsx! {
        div {
            class: "app-shell w-screen h-screen overflow-y-auto bg-dark-bg text-white",
            Router::<routes::Route> {}
        }
    }
}
