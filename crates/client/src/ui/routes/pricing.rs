//! Pricing page.

use dioxus::prelude::*;

use super::Route;

struct Tier {
    name: &'static str,
    price: &'static str,
    blurb: &'static str,
    features: &'static [&'static str],
}

const TIERS: &[Tier] = &[
    Tier {
        name: "Starter",
        price: "$0",
        blurb: "For trying things out",
        features: &["Up to 10 products", "Basic analytics", "Community support"],
    },
    Tier {
        name: "Growth",
        price: "$29/mo",
        blurb: "For brands finding their feet",
        features: &["Unlimited products", "Full analytics", "Email support"],
    },
    Tier {
        name: "Scale",
        price: "$99/mo",
        blurb: "For established catalogs",
        features: &["Everything in Growth", "Priority support", "Custom domain"],
    },
];

/// Pricing route
#[component]
pub fn PricingRoute() -> Element {
    rsx! {
        div {
            class: "marketing-page flex flex-col items-center gap-8 px-8 py-16",

            h1 { class: "text-3xl text-white m-0", "Simple pricing" }
            p { class: "text-gray-400 m-0", "Start free. Upgrade when your catalog does." }

            div {
                class: "grid grid-cols-3 gap-6 w-full max-w-4xl",
                for tier in TIERS {
                    div {
                        class: "bg-dark-surface rounded-lg p-6 flex flex-col gap-3",
                        h3 { class: "text-white m-0", "{tier.name}" }
                        span { class: "text-3xl text-white", "{tier.price}" }
                        p { class: "text-gray-400 text-sm m-0", "{tier.blurb}" }
                        ul {
                            class: "text-gray-300 text-sm flex flex-col gap-1 m-0 pl-4",
                            for feature in tier.features {
                                li { "{feature}" }
                            }
                        }
                        Link {
                            to: Route::SignUpRoute {},
                            class: "mt-auto px-4 py-2 bg-accent text-white rounded text-center",
                            "Choose {tier.name}"
                        }
                    }
                }
            }

            Link { to: Route::HomeRoute {}, class: "text-gray-400 text-sm", "Back to home" }
        }
    }
}
