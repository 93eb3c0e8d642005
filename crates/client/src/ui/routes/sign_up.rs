//! Sign-up screen.

use dioxus::prelude::*;

use marque_domain::{FieldError, SignUpForm};

use crate::application::dto::SignUpData;
use crate::presentation::components::common::{ErrorBanner, FormField};
use crate::presentation::services::use_auth_service;

use super::Route;

fn field_message(errors: &[FieldError], targets: &[FieldError]) -> Option<String> {
    errors
        .iter()
        .find(|e| targets.contains(e))
        .map(ToString::to_string)
}

/// Sign-up route
#[component]
pub fn SignUpRoute() -> Element {
    let navigator = use_navigator();
    let auth = use_auth_service();

    // Form state
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut field_errors: Signal<Vec<FieldError>> = use_signal(Vec::new);
    let mut error_message: Signal<Option<String>> = use_signal(|| None);
    let mut is_loading = use_signal(|| false);

    let on_submit = move |_| {
        if *is_loading.read() {
            return;
        }
        let form = SignUpForm {
            name: name.read().clone(),
            email: email.read().clone(),
            password: password.read().clone(),
            confirm_password: confirm_password.read().clone(),
        };
        let errors = form.validate();
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(Vec::new());
        error_message.set(None);
        is_loading.set(true);

        let auth = auth.clone();
        spawn(async move {
            let data = SignUpData {
                name: form.name.clone(),
                email: form.email.clone(),
                password: form.password.clone(),
            };
            match auth.sign_up(&data).await {
                Ok(()) => {
                    navigator.push(Route::VerifyEmailRoute {
                        identifier: form.email.clone(),
                    });
                }
                Err(e) => error_message.set(Some(e.user_message())),
            }
            is_loading.set(false);
        });
    };

    let errors = field_errors.read().clone();

    rsx! {
        div {
            class: "auth-screen flex items-center justify-center min-h-full p-8",

            div {
                class: "w-full max-w-md bg-dark-surface rounded-lg p-6 flex flex-col gap-4",

                h1 { class: "text-2xl text-white m-0", "Create your brand account" }

                if let Some(msg) = error_message.read().as_ref() {
                    ErrorBanner {
                        message: msg.clone(),
                        on_dismiss: move |_| error_message.set(None),
                    }
                }

                FormField {
                    label: "Name",
                    required: true,
                    error: field_message(&errors, &[FieldError::NameRequired]),
                    children: rsx! {
                        input {
                            r#type: "text",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                            placeholder: "Your name",
                            class: "p-2 bg-dark-bg border border-gray-700 rounded text-white",
                        }
                    }
                }

                FormField {
                    label: "Email",
                    required: true,
                    error: field_message(&errors, &[FieldError::EmailRequired, FieldError::EmailInvalid]),
                    children: rsx! {
                        input {
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                            placeholder: "you@example.com",
                            class: "p-2 bg-dark-bg border border-gray-700 rounded text-white",
                        }
                    }
                }

                FormField {
                    label: "Password",
                    required: true,
                    error: field_message(&errors, &[FieldError::PasswordRequired, FieldError::PasswordTooShort]),
                    children: rsx! {
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            class: "p-2 bg-dark-bg border border-gray-700 rounded text-white",
                        }
                    }
                }

                FormField {
                    label: "Confirm password",
                    required: true,
                    error: field_message(&errors, &[FieldError::PasswordMismatch]),
                    children: rsx! {
                        input {
                            r#type: "password",
                            value: "{confirm_password}",
                            oninput: move |e| confirm_password.set(e.value()),
                            class: "p-2 bg-dark-bg border border-gray-700 rounded text-white",
                        }
                    }
                }

                button {
                    onclick: on_submit,
                    disabled: *is_loading.read(),
                    class: "p-2 bg-accent text-white rounded cursor-pointer disabled:opacity-50",
                    if *is_loading.read() { "Creating account..." } else { "Create account" }
                }

                div {
                    class: "text-sm text-gray-400 text-center",
                    "Already have an account? "
                    Link { to: Route::SignInRoute {}, "Sign in" }
                }
            }
        }
    }
}
