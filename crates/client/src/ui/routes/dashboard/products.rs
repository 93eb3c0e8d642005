//! Products panel - list, create, publish, delete.

use dioxus::prelude::*;

use crate::application::dto::{ProductData, ProductDraft};
use crate::presentation::components::common::{ErrorBanner, FormField};
use crate::presentation::services::use_product_service;

use super::DashboardShell;

/// Products dashboard route
#[component]
pub fn ProductsRoute() -> Element {
    let products_svc = use_product_service();

    let mut products: Signal<Vec<ProductData>> = use_signal(Vec::new);
    let mut is_loading = use_signal(|| true);
    let mut is_saving = use_signal(|| false);
    let mut error_message: Signal<Option<String>> = use_signal(|| None);

    // Draft form state
    let mut draft_name = use_signal(String::new);
    let mut draft_description = use_signal(String::new);
    let mut draft_price = use_signal(String::new);

    // Load products on mount
    {
        let svc = products_svc.clone();
        use_effect(move || {
            let svc = svc.clone();
            spawn(async move {
                match svc.list_products().await {
                    Ok(list) => products.set(list),
                    Err(e) => error_message.set(Some(e.user_message())),
                }
                is_loading.set(false);
            });
        });
    }

    let svc_for_create = products_svc.clone();
    let on_create = move |_| {
        if *is_saving.read() {
            return;
        }
        let name = draft_name.read().trim().to_string();
        if name.is_empty() {
            error_message.set(Some("Product name is required".to_string()));
            return;
        }
        // Price entered in dollars; tolerate "19.99" and "19".
        let price_cents = match parse_price_cents(&draft_price.read()) {
            Some(cents) => cents,
            None => {
                error_message.set(Some("Enter a price like 19.99".to_string()));
                return;
            }
        };
        let draft = ProductDraft {
            name,
            description: draft_description.read().trim().to_string(),
            price_cents,
        };
        error_message.set(None);
        is_saving.set(true);

        let svc = svc_for_create.clone();
        spawn(async move {
            match svc.create_product(&draft).await {
                Ok(created) => {
                    products.write().push(created);
                    draft_name.set(String::new());
                    draft_description.set(String::new());
                    draft_price.set(String::new());
                }
                Err(e) => error_message.set(Some(e.user_message())),
            }
            is_saving.set(false);
        });
    };

    let svc_for_toggle = products_svc.clone();
    let on_toggle = move |product: ProductData| {
        let svc = svc_for_toggle.clone();
        spawn(async move {
            match svc.toggle_published(&product).await {
                Ok(saved) => {
                    let mut list = products.write();
                    if let Some(entry) = list.iter_mut().find(|p| p.id == saved.id) {
                        *entry = saved;
                    }
                }
                Err(e) => error_message.set(Some(e.user_message())),
            }
        });
    };

    let svc_for_delete = products_svc.clone();
    let on_delete = move |product_id: uuid::Uuid| {
        let svc = svc_for_delete.clone();
        spawn(async move {
            match svc.delete_product(product_id).await {
                Ok(()) => products.write().retain(|p| p.id != product_id),
                Err(e) => error_message.set(Some(e.user_message())),
            }
        });
    };

    rsx! {
        DashboardShell {
            title: "Products",

            if let Some(msg) = error_message.read().as_ref() {
                ErrorBanner {
                    message: msg.clone(),
                    on_dismiss: move |_| error_message.set(None),
                }
            }

            // New product form
            div {
                class: "bg-dark-surface rounded-lg p-4 flex gap-4 items-end",

                FormField {
                    label: "Name",
                    required: true,
                    children: rsx! {
                        input {
                            r#type: "text",
                            value: "{draft_name}",
                            oninput: move |e| draft_name.set(e.value()),
                            class: "p-2 bg-dark-bg border border-gray-700 rounded text-white",
                        }
                    }
                }
                FormField {
                    label: "Description",
                    children: rsx! {
                        input {
                            r#type: "text",
                            value: "{draft_description}",
                            oninput: move |e| draft_description.set(e.value()),
                            class: "p-2 bg-dark-bg border border-gray-700 rounded text-white",
                        }
                    }
                }
                FormField {
                    label: "Price ($)",
                    required: true,
                    children: rsx! {
                        input {
                            r#type: "text",
                            value: "{draft_price}",
                            oninput: move |e| draft_price.set(e.value()),
                            placeholder: "19.99",
                            class: "p-2 bg-dark-bg border border-gray-700 rounded text-white w-24",
                        }
                    }
                }
                button {
                    onclick: on_create,
                    disabled: *is_saving.read(),
                    class: "px-4 py-2 bg-accent text-white rounded cursor-pointer disabled:opacity-50",
                    if *is_saving.read() { "Adding..." } else { "Add product" }
                }
            }

            // Product list
            if *is_loading.read() {
                div { class: "text-gray-500 p-8 text-center", "Loading products..." }
            } else if products.read().is_empty() {
                div { class: "text-gray-500 p-8 text-center", "No products yet. Add your first one above." }
            } else {
                div {
                    class: "flex flex-col gap-2",
                    for product in products.read().iter().cloned() {
                        div {
                            key: "{product.id}",
                            class: "bg-dark-surface rounded-lg p-4 flex justify-between items-center",

                            div {
                                class: "flex flex-col",
                                span { class: "text-white", "{product.name}" }
                                span { class: "text-gray-400 text-sm", "{product.description}" }
                            }

                            div {
                                class: "flex gap-3 items-center",
                                span { class: "text-white", "{product.price_display()}" }
                                button {
                                    onclick: {
                                        let on_toggle = on_toggle.clone();
                                        let product = product.clone();
                                        move |_| on_toggle(product.clone())
                                    },
                                    class: "px-3 py-1 border border-gray-700 rounded cursor-pointer bg-transparent text-sm text-gray-300",
                                    if product.published { "Unpublish" } else { "Publish" }
                                }
                                button {
                                    onclick: {
                                        let on_delete = on_delete.clone();
                                        let id = product.id;
                                        move |_| on_delete(id)
                                    },
                                    class: "px-3 py-1 border border-red-500/40 text-red-400 rounded cursor-pointer bg-transparent text-sm",
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Parse a dollars string ("19", "19.9", "19.99") into cents.
fn parse_price_cents(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let (dollars, cents) = match raw.split_once('.') {
        None => (raw, "0"),
        Some((d, c)) if c.len() <= 2 => (d, c),
        Some(_) => return None,
    };
    let dollars: u32 = dollars.parse().ok()?;
    let mut cents: u32 = if cents.is_empty() { 0 } else { cents.parse().ok()? };
    if raw.split_once('.').map(|(_, c)| c.len()) == Some(1) {
        cents *= 10;
    }
    dollars.checked_mul(100)?.checked_add(cents)
}

#[cfg(test)]
mod tests {
    use super::parse_price_cents;

    #[test]
    fn parses_common_price_shapes() {
        assert_eq!(parse_price_cents("19.99"), Some(1999));
        assert_eq!(parse_price_cents("19.9"), Some(1990));
        assert_eq!(parse_price_cents("19."), Some(1900));
        assert_eq!(parse_price_cents("19"), Some(1900));
        assert_eq!(parse_price_cents(" 5.00 "), Some(500));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_price_cents(""), None);
        assert_eq!(parse_price_cents("abc"), None);
        assert_eq!(parse_price_cents("1.999"), None);
        assert_eq!(parse_price_cents("-4"), None);
    }
}
