//! Dashboard routes and shared shell.

use dioxus::prelude::*;

use crate::presentation::state::AuthState;

use super::Route;

mod analytics;
mod brand_settings;
mod products;

pub use analytics::AnalyticsRoute;
pub use brand_settings::BrandSettingsRoute;
pub use products::ProductsRoute;

/// Wraps every dashboard panel with the nav header and the signed-in gate.
#[component]
pub fn DashboardShell(title: &'static str, children: Element) -> Element {
    let navigator = use_navigator();
    let mut auth_state = use_context::<AuthState>();

    if !auth_state.is_signed_in() {
        return rsx! {
            div {
                class: "flex flex-col items-center justify-center gap-4 min-h-full p-8",
                p { class: "text-gray-400 m-0", "You need to sign in to see your dashboard." }
                Link {
                    to: Route::SignInRoute {},
                    class: "px-4 py-2 bg-accent text-white rounded",
                    "Sign in"
                }
            }
        };
    }

    let display_name = auth_state
        .session()
        .read()
        .as_ref()
        .map(|s| s.display_name.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "dashboard flex flex-col min-h-full",

            header {
                class: "flex justify-between items-center px-8 py-4 border-b border-gray-800",

                div {
                    class: "flex gap-4 items-center",
                    span { class: "text-xl font-bold text-white", "Marque" }
                    nav {
                        class: "flex gap-3 text-sm text-gray-300",
                        Link { to: Route::ProductsRoute {}, "Products" }
                        Link { to: Route::BrandSettingsRoute {}, "Brand" }
                        Link { to: Route::AnalyticsRoute {}, "Analytics" }
                    }
                }

                div {
                    class: "flex gap-3 items-center text-sm text-gray-400",
                    span { "{display_name}" }
                    button {
                        onclick: move |_| {
                            auth_state.clear();
                            navigator.push(Route::HomeRoute {});
                        },
                        class: "px-3 py-1 border border-gray-700 rounded cursor-pointer bg-transparent text-gray-300",
                        "Sign out"
                    }
                }
            }

            main {
                class: "flex-1 p-8 flex flex-col gap-4",
                h1 { class: "text-2xl text-white m-0", "{title}" }
                {children}
            }
        }
    }
}
