//! Email verification screen.
//!
//! Owns a `VerificationFlow` signal: the `CodeInput` widget edits its code
//! while this route drives the submit protocol and the resend cooldown.

use std::time::Duration;

use dioxus::prelude::*;

use marque_domain::{ResendCooldown, SubmitError, VerificationFlow};

use crate::presentation::components::common::ErrorBanner;
use crate::presentation::components::CodeInput;
use crate::presentation::services::use_auth_service;
use crate::presentation::state::AuthState;

use super::Route;

/// Email verification route
#[component]
pub fn VerifyEmailRoute(identifier: String) -> Element {
    let navigator = use_navigator();
    let auth = use_auth_service();
    let mut auth_state = use_context::<AuthState>();

    let mut flow = use_signal(VerificationFlow::new);
    let mut cooldown = use_signal(ResendCooldown::new);
    let mut validation_message: Signal<Option<String>> = use_signal(|| None);
    let mut resend_error: Signal<Option<String>> = use_signal(|| None);

    let identifier_for_submit = identifier.clone();
    let auth_for_submit = auth.clone();
    let on_submit = move |_| {
        let identifier = identifier_for_submit.clone();
        let auth = auth_for_submit.clone();
        spawn(async move {
            // Mark the flow as in flight before the first await so a second
            // click cannot start another verify call.
            let code = {
                let mut flow = flow.write();
                match flow.begin_submit() {
                    Ok(code) => code,
                    Err(SubmitError::AlreadySubmitting) => return,
                    Err(e) => {
                        validation_message.set(Some(e.to_string()));
                        return;
                    }
                }
            };
            validation_message.set(None);
            match auth.verify_code(&identifier, &code).await {
                Ok(session) => {
                    flow.write().resolve_success();
                    auth_state.set_session(session);
                    navigator.push(Route::ProductsRoute {});
                }
                Err(e) => flow.write().resolve_failure(e.user_message()),
            }
        });
    };

    let identifier_for_resend = identifier.clone();
    let auth_for_resend = auth.clone();
    let on_resend = move |_| {
        if cooldown.read().is_active() {
            return;
        }
        let identifier = identifier_for_resend.clone();
        let auth = auth_for_resend.clone();
        spawn(async move {
            match auth.resend_code(&identifier).await {
                Ok(()) => {
                    resend_error.set(None);
                    cooldown.write().start();
                    // Drive the countdown with one-second delayed callbacks.
                    loop {
                        tokio::time::sleep(Duration::from_secs(1)).await;
                        if cooldown.write().tick() == 0 {
                            break;
                        }
                    }
                }
                Err(e) => resend_error.set(Some(e.user_message())),
            }
        });
    };

    let is_submitting = flow.read().is_submitting();
    let can_submit = flow.read().code().is_complete() && !is_submitting;
    let cooldown_active = cooldown.read().is_active();
    let cooldown_remaining = cooldown.read().remaining();

    rsx! {
        div {
            class: "auth-screen flex items-center justify-center min-h-full p-8",

            div {
                class: "w-full max-w-md bg-dark-surface rounded-lg p-6 flex flex-col gap-4 text-center",

                h1 { class: "text-2xl text-white m-0", "Check your email" }
                p {
                    class: "text-gray-400 m-0",
                    "We sent a 6-digit code to "
                    span { class: "text-white", "{identifier}" }
                }

                if let Some(msg) = flow.read().error() {
                    ErrorBanner {
                        message: msg.to_string(),
                        on_dismiss: move |_| flow.write().dismiss_error(),
                    }
                }

                CodeInput { flow }

                if let Some(msg) = validation_message.read().as_ref() {
                    span { class: "text-red-500 text-sm", "{msg}" }
                }

                button {
                    onclick: on_submit,
                    disabled: !can_submit,
                    class: "p-2 bg-accent text-white rounded cursor-pointer disabled:opacity-50",
                    if is_submitting { "Verifying..." } else { "Verify" }
                }

                div {
                    class: "text-sm text-gray-400 flex flex-col gap-1",

                    if let Some(msg) = resend_error.read().as_ref() {
                        span { class: "text-red-500", "{msg}" }
                    }

                    if cooldown_active {
                        span { "Resend available in {cooldown_remaining}s" }
                    } else {
                        button {
                            onclick: on_resend,
                            class: "bg-transparent border-none text-accent cursor-pointer",
                            "Resend code"
                        }
                    }
                }
            }
        }
    }
}
