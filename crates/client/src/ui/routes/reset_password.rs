//! Password reset screen.
//!
//! Two steps: request a reset code for an email address, then enter the
//! code plus the new password. This screen is the second consumer of
//! `CodeInput` and historically behaved differently from email
//! verification: a short paste clears the remaining slots and a rejected
//! code wipes the entry. Both choices are made explicit here via the
//! domain policies.

use dioxus::prelude::*;

use marque_domain::{
    FailurePolicy, FieldError, PastePolicy, ResetRequestForm, SubmitError, VerificationFlow,
    MIN_PASSWORD_LEN,
};

use crate::presentation::components::common::{ErrorBanner, FormField};
use crate::presentation::components::CodeInput;
use crate::presentation::services::use_auth_service;

use super::Route;

/// Password reset route
#[component]
pub fn ResetPasswordRoute() -> Element {
    let navigator = use_navigator();
    let auth = use_auth_service();

    let mut email = use_signal(String::new);
    let mut code_sent = use_signal(|| false);
    let mut flow = use_signal(|| VerificationFlow::with_policy(FailurePolicy::ClearCode));
    let mut new_password = use_signal(String::new);
    let mut field_error: Signal<Option<String>> = use_signal(|| None);
    let mut error_message: Signal<Option<String>> = use_signal(|| None);
    let mut is_loading = use_signal(|| false);

    let auth_for_request = auth.clone();
    let on_request = move |_| {
        if *is_loading.read() {
            return;
        }
        let form = ResetRequestForm {
            email: email.read().clone(),
        };
        if let Some(err) = form.validate().first() {
            field_error.set(Some(err.to_string()));
            return;
        }
        field_error.set(None);
        error_message.set(None);
        is_loading.set(true);

        let auth = auth_for_request.clone();
        spawn(async move {
            match auth.request_password_reset(&form.email).await {
                Ok(()) => code_sent.set(true),
                Err(e) => error_message.set(Some(e.user_message())),
            }
            is_loading.set(false);
        });
    };

    let auth_for_confirm = auth.clone();
    let on_confirm = move |_| {
        if new_password.read().chars().count() < MIN_PASSWORD_LEN {
            field_error.set(Some(FieldError::PasswordTooShort.to_string()));
            return;
        }
        field_error.set(None);

        let auth = auth_for_confirm.clone();
        spawn(async move {
            let code = {
                let mut flow = flow.write();
                match flow.begin_submit() {
                    Ok(code) => code,
                    Err(SubmitError::AlreadySubmitting) => return,
                    Err(e) => {
                        field_error.set(Some(e.to_string()));
                        return;
                    }
                }
            };
            let address = email.read().clone();
            let password = new_password.read().clone();
            match auth.complete_password_reset(&address, &code, &password).await {
                Ok(()) => {
                    flow.write().resolve_success();
                    navigator.push(Route::SignInRoute {});
                }
                Err(e) => flow.write().resolve_failure(e.user_message()),
            }
        });
    };

    let is_submitting = flow.read().is_submitting();
    let can_confirm = flow.read().code().is_complete() && !is_submitting;

    rsx! {
        div {
            class: "auth-screen flex items-center justify-center min-h-full p-8",

            div {
                class: "w-full max-w-md bg-dark-surface rounded-lg p-6 flex flex-col gap-4",

                h1 { class: "text-2xl text-white m-0", "Reset your password" }

                if let Some(msg) = error_message.read().as_ref() {
                    ErrorBanner {
                        message: msg.clone(),
                        on_dismiss: move |_| error_message.set(None),
                    }
                }

                if !*code_sent.read() {
                    FormField {
                        label: "Email",
                        required: true,
                        error: field_error.read().clone(),
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

                    button {
                        onclick: on_request,
                        disabled: *is_loading.read(),
                        class: "p-2 bg-accent text-white rounded cursor-pointer disabled:opacity-50",
                        if *is_loading.read() { "Sending..." } else { "Send reset code" }
                    }

                    div {
                        class: "text-sm text-gray-400 text-center",
                        Link { to: Route::SignInRoute {}, "Back to sign in" }
                    }
                } else {
                    p {
                        class: "text-gray-400 m-0",
                        "Enter the code we sent to "
                        span { class: "text-white", "{email}" }
                        " and pick a new password."
                    }

                    if let Some(msg) = flow.read().error() {
                        ErrorBanner {
                            message: msg.to_string(),
                            on_dismiss: move |_| flow.write().dismiss_error(),
                        }
                    }

                    CodeInput { flow, paste_policy: PastePolicy::ClearRemainder }

                    FormField {
                        label: "New password",
                        required: true,
                        error: field_error.read().clone(),
                        children: rsx! {
                            input {
                                r#type: "password",
                                value: "{new_password}",
                                oninput: move |e| new_password.set(e.value()),
                                class: "p-2 bg-dark-bg border border-gray-700 rounded text-white",
                            }
                        }
                    }

                    button {
                        onclick: on_confirm,
                        disabled: !can_confirm,
                        class: "p-2 bg-accent text-white rounded cursor-pointer disabled:opacity-50",
                        if is_submitting { "Resetting..." } else { "Reset password" }
                    }
                }
            }
        }
    }
}
