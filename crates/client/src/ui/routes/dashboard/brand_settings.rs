//! Brand settings panel.

use dioxus::prelude::*;

use marque_domain::validation::is_valid_email;

use crate::application::dto::BrandSettingsData;
use crate::presentation::components::common::{ErrorBanner, FormField};
use crate::presentation::services::use_brand_service;

use super::DashboardShell;

/// Brand settings dashboard route
#[component]
pub fn BrandSettingsRoute() -> Element {
    let brand_svc = use_brand_service();

    // Form state
    let mut display_name = use_signal(String::new);
    let mut tagline = use_signal(String::new);
    let mut support_email = use_signal(String::new);
    let mut publicly_listed = use_signal(|| false);
    let mut is_loading = use_signal(|| true);
    let mut is_saving = use_signal(|| false);
    let mut success_message: Signal<Option<String>> = use_signal(|| None);
    let mut error_message: Signal<Option<String>> = use_signal(|| None);

    // Load current settings on mount
    {
        let svc = brand_svc.clone();
        use_effect(move || {
            let svc = svc.clone();
            spawn(async move {
                match svc.settings().await {
                    Ok(settings) => {
                        display_name.set(settings.display_name);
                        tagline.set(settings.tagline);
                        support_email.set(settings.support_email);
                        publicly_listed.set(settings.publicly_listed);
                    }
                    Err(e) => error_message.set(Some(e.user_message())),
                }
                is_loading.set(false);
            });
        });
    }

    let svc_for_save = brand_svc.clone();
    let on_save = move |_| {
        if *is_saving.read() {
            return;
        }
        let email = support_email.read().clone();
        if !email.is_empty() && !is_valid_email(&email) {
            error_message.set(Some("Support email doesn't look valid".to_string()));
            return;
        }
        let settings = BrandSettingsData {
            display_name: display_name.read().trim().to_string(),
            tagline: tagline.read().trim().to_string(),
            support_email: email,
            publicly_listed: *publicly_listed.read(),
        };
        error_message.set(None);
        success_message.set(None);
        is_saving.set(true);

        let svc = svc_for_save.clone();
        spawn(async move {
            match svc.save_settings(&settings).await {
                Ok(saved) => {
                    display_name.set(saved.display_name);
                    tagline.set(saved.tagline);
                    support_email.set(saved.support_email);
                    publicly_listed.set(saved.publicly_listed);
                    success_message.set(Some("Settings saved".to_string()));
                }
                Err(e) => error_message.set(Some(e.user_message())),
            }
            is_saving.set(false);
        });
    };

    rsx! {
        DashboardShell {
            title: "Brand settings",

            if let Some(msg) = error_message.read().as_ref() {
                ErrorBanner {
                    message: msg.clone(),
                    on_dismiss: move |_| error_message.set(None),
                }
            }
            if let Some(msg) = success_message.read().as_ref() {
                div {
                    class: "px-4 py-3 bg-green-500/10 border border-green-500/30 text-green-500 text-sm rounded",
                    "{msg}"
                }
            }

            if *is_loading.read() {
                div { class: "text-gray-500 p-8 text-center", "Loading settings..." }
            } else {
                div {
                    class: "bg-dark-surface rounded-lg p-6 flex flex-col gap-4 max-w-lg",

                    FormField {
                        label: "Display name",
                        required: true,
                        children: rsx! {
                            input {
                                r#type: "text",
                                value: "{display_name}",
                                oninput: move |e| display_name.set(e.value()),
                                class: "p-2 bg-dark-bg border border-gray-700 rounded text-white",
                            }
                        }
                    }

                    FormField {
                        label: "Tagline",
                        children: rsx! {
                            input {
                                r#type: "text",
                                value: "{tagline}",
                                oninput: move |e| tagline.set(e.value()),
                                placeholder: "One line about your brand",
                                class: "p-2 bg-dark-bg border border-gray-700 rounded text-white",
                            }
                        }
                    }

                    FormField {
                        label: "Support email",
                        children: rsx! {
                            input {
                                r#type: "email",
                                value: "{support_email}",
                                oninput: move |e| support_email.set(e.value()),
                                placeholder: "help@yourbrand.com",
                                class: "p-2 bg-dark-bg border border-gray-700 rounded text-white",
                            }
                        }
                    }

                    label {
                        class: "flex gap-2 items-center text-sm text-gray-300",
                        input {
                            r#type: "checkbox",
                            checked: *publicly_listed.read(),
                            onchange: move |e| publicly_listed.set(e.checked()),
                        }
                        "List my brand in the public directory"
                    }

                    button {
                        onclick: on_save,
                        disabled: *is_saving.read(),
                        class: "p-2 bg-accent text-white rounded cursor-pointer disabled:opacity-50",
                        if *is_saving.read() { "Saving..." } else { "Save settings" }
                    }
                }
            }
        }
    }
}
