//! Sign-in screen.

use dioxus::prelude::*;

use marque_domain::{FieldError, SignInForm};

use crate::presentation::components::common::{ErrorBanner, FormField};
use crate::presentation::services::use_auth_service;
use crate::presentation::state::AuthState;

use super::Route;

fn field_message(errors: &[FieldError], targets: &[FieldError]) -> Option<String> {
    errors
        .iter()
        .find(|e| targets.contains(e))
        .map(ToString::to_string)
}

/// Sign-in route
#[component]
pub fn SignInRoute() -> Element {
    let navigator = use_navigator();
    let auth = use_auth_service();
    let mut auth_state = use_context::<AuthState>();

    // Form state
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut field_errors: Signal<Vec<FieldError>> = use_signal(Vec::new);
    let mut error_message: Signal<Option<String>> = use_signal(|| None);
    let mut is_loading = use_signal(|| false);

    let on_submit = move |_| {
        if *is_loading.read() {
            return;
        }
        let form = SignInForm {
            email: email.read().clone(),
            password: password.read().clone(),
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
            match auth.sign_in(&form.email, &form.password).await {
                Ok(session) => {
                    auth_state.set_session(session);
                    navigator.push(Route::ProductsRoute {});
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

                h1 { class: "text-2xl text-white m-0", "Welcome back" }

                if let Some(msg) = error_message.read().as_ref() {
                    ErrorBanner {
                        message: msg.clone(),
                        on_dismiss: move |_| error_message.set(None),
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
                    error: field_message(&errors, &[FieldError::PasswordRequired]),
                    children: rsx! {
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            class: "p-2 bg-dark-bg border border-gray-700 rounded text-white",
                        }
                    }
                }

                button {
                    onclick: on_submit,
                    disabled: *is_loading.read(),
                    class: "p-2 bg-accent text-white rounded cursor-pointer disabled:opacity-50",
                    if *is_loading.read() { "Signing in..." } else { "Sign in" }
                }

                div {
                    class: "flex justify-between text-sm text-gray-400",
                    Link { to: Route::ResetPasswordRoute {}, "Forgot password?" }
                    Link { to: Route::SignUpRoute {}, "Create an account" }
                }
            }
        }
    }
}
