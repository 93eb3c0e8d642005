//! Audience landing pages.

use dioxus::prelude::*;

use super::Route;

/// Brand-owner landing route
#[component]
pub fn BrandLandingRoute() -> Element {
    rsx! {
        div {
            class: "marketing-page flex flex-col items-center gap-6 px-8 py-24 text-center",

            h1 { class: "text-4xl text-white m-0", "Built for independent brands" }
            p {
                class: "text-gray-400 max-w-xl m-0",
                "Your products, your page, your numbers. Marque handles the storefront so you can handle the making."
            }

            div {
                class: "grid grid-cols-2 gap-6 w-full max-w-3xl text-left",
                for (title, blurb) in [
                    ("Own your catalog", "Create, edit, and publish products from one panel."),
                    ("Know your buyers", "See views and orders per product, not vanity charts."),
                    ("Stay reachable", "A support email and tagline buyers can actually find."),
                    ("No lock-in", "Your data is yours. Export any time."),
                ] {
                    div {
                        class: "bg-dark-surface rounded-lg p-6",
                        h3 { class: "text-white m-0 mb-2", "{title}" }
                        p { class: "text-gray-400 text-sm m-0", "{blurb}" }
                    }
                }
            }

            Link {
                to: Route::SignUpRoute {},
                class: "px-6 py-3 bg-accent text-white rounded text-lg",
                "Open your storefront"
            }
        }
    }
}

/// Buyer landing route
#[component]
pub fn BuyerLandingRoute() -> Element {
    rsx! {
        div {
            class: "marketing-page flex flex-col items-center gap-6 px-8 py-24 text-center",

            h1 { class: "text-4xl text-white m-0", "Find brands worth backing" }
            p {
                class: "text-gray-400 max-w-xl m-0",
                "Every storefront on Marque is run by the people who make the products. No resellers, no drop-shipping."
            }

            div {
                class: "flex gap-4",
                Link {
                    to: Route::SignUpRoute {},
                    class: "px-6 py-3 bg-accent text-white rounded",
                    "Create an account"
                }
                Link {
                    to: Route::HomeRoute {},
                    class: "px-6 py-3 border border-gray-700 text-gray-300 rounded",
                    "Learn more"
                }
            }
        }
    }
}
