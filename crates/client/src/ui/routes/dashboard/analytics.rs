//! Analytics panel.

use dioxus::prelude::*;

use crate::application::dto::AnalyticsSummary;
use crate::application::services::DEFAULT_SUMMARY_DAYS;
use crate::presentation::components::common::ErrorBanner;
use crate::presentation::services::use_analytics_service;

use super::DashboardShell;

const WINDOWS: &[(u32, &str)] = &[(7, "7 days"), (30, "30 days"), (90, "90 days")];

/// Analytics dashboard route
#[component]
pub fn AnalyticsRoute() -> Element {
    let analytics_svc = use_analytics_service();

    let mut days = use_signal(|| DEFAULT_SUMMARY_DAYS);
    let mut summary: Signal<Option<AnalyticsSummary>> = use_signal(|| None);
    let mut is_loading = use_signal(|| true);
    let mut error_message: Signal<Option<String>> = use_signal(|| None);

    // Reload whenever the window changes
    {
        let svc = analytics_svc.clone();
        use_effect(move || {
            let svc = svc.clone();
            let window = *days.read();
            is_loading.set(true);
            spawn(async move {
                match svc.summary(window).await {
                    Ok(data) => {
                        summary.set(Some(data));
                        error_message.set(None);
                    }
                    Err(e) => error_message.set(Some(e.user_message())),
                }
                is_loading.set(false);
            });
        });
    }

    rsx! {
        DashboardShell {
            title: "Analytics",

            div {
                class: "flex gap-2",
                for (window, label) in WINDOWS.iter().copied() {
                    button {
                        key: "{window}",
                        onclick: move |_| days.set(window),
                        class: if *days.read() == window {
                            "px-3 py-1 bg-accent text-white rounded text-sm cursor-pointer"
                        } else {
                            "px-3 py-1 border border-gray-700 text-gray-300 rounded text-sm cursor-pointer bg-transparent"
                        },
                        "{label}"
                    }
                }
            }

            if let Some(msg) = error_message.read().as_ref() {
                ErrorBanner {
                    message: msg.clone(),
                    on_dismiss: move |_| error_message.set(None),
                }
            }

            if *is_loading.read() {
                div { class: "text-gray-500 p-8 text-center", "Loading analytics..." }
            } else if let Some(data) = summary.read().as_ref() {
                div {
                    class: "grid grid-cols-3 gap-4",
                    StatCard { label: "Views", value: data.total_views.to_string() }
                    StatCard { label: "Orders", value: data.total_orders.to_string() }
                    StatCard { label: "Revenue", value: data.revenue_display() }
                }

                div {
                    class: "bg-dark-surface rounded-lg p-4 flex flex-col gap-2",
                    h3 { class: "text-white m-0", "Top products" }

                    if data.top_products.is_empty() {
                        span { class: "text-gray-500 text-sm", "No orders in this window yet." }
                    } else {
                        for product in data.top_products.iter() {
                            div {
                                key: "{product.product_id}",
                                class: "flex justify-between text-sm",
                                span { class: "text-gray-300", "{product.name}" }
                                span { class: "text-gray-400", "{product.orders} orders" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "bg-dark-surface rounded-lg p-4 flex flex-col gap-1",
            span { class: "text-gray-400 text-sm", "{label}" }
            span { class: "text-2xl text-white", "{value}" }
        }
    }
}
