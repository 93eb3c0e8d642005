//! Marketing home page.

use dioxus::prelude::*;

use super::Route;

/// Home route
#[component]
pub fn HomeRoute() -> Element {
    rsx! {
        div {
            class: "marketing-page flex flex-col",

            header {
                class: "flex justify-between items-center px-8 py-4 border-b border-gray-800",
                span { class: "text-xl font-bold text-white", "Marque" }
                nav {
                    class: "flex gap-4 text-sm text-gray-300 items-center",
                    Link { to: Route::PricingRoute {}, "Pricing" }
                    Link { to: Route::BrandLandingRoute {}, "For brands" }
                    Link { to: Route::BuyerLandingRoute {}, "For buyers" }
                    Link {
                        to: Route::SignInRoute {},
                        class: "px-3 py-1 bg-accent text-white rounded",
                        "Sign in"
                    }
                }
            }

            section {
                class: "flex flex-col items-center gap-4 px-8 py-24 text-center",
                h1 { class: "text-4xl text-white m-0", "Where independent brands meet their buyers" }
                p {
                    class: "text-gray-400 max-w-xl m-0",
                    "Launch a storefront, manage your catalog, and see what's selling, without hiring a platform team."
                }
                Link {
                    to: Route::SignUpRoute {},
                    class: "px-6 py-3 bg-accent text-white rounded text-lg",
                    "Get started free"
                }
            }

            section {
                class: "grid grid-cols-3 gap-6 px-8 py-12",
                for (title, blurb) in [
                    ("Catalog in minutes", "Add products, set prices, publish when ready."),
                    ("A brand page that's yours", "Name, tagline, and support details in one place."),
                    ("Numbers that matter", "Views, orders, and revenue at a glance."),
                ] {
                    div {
                        class: "bg-dark-surface rounded-lg p-6 flex flex-col gap-2",
                        h3 { class: "text-white m-0", "{title}" }
                        p { class: "text-gray-400 text-sm m-0", "{blurb}" }
                    }
                }
            }
        }
    }
}
