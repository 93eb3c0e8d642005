//! Labeled form field wrapper with an optional inline error.

use dioxus::prelude::*;

/// Label + control + inline validation message
#[component]
pub fn FormField(
    label: &'static str,
    #[props(default = false)] required: bool,
    #[props(default)] error: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "form-field flex flex-col gap-1",

            label {
                class: "text-sm text-gray-300",
                "{label}"
                if required {
                    span { class: "text-red-500 ml-1", "*" }
                }
            }

            {children}

            if let Some(msg) = error {
                span { class: "text-red-500 text-xs", "{msg}" }
            }
        }
    }
}
