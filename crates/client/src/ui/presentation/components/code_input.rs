//! Segmented code input
//!
//! One input field per digit, over a shared `VerificationFlow` signal.
//! The domain model decides what each keystroke or paste does and which
//! slot should be focused next; this component renders the slots, wires
//! the events, and performs the focus move through mounted-element
//! handles. Fields are disabled while a submission is in flight.

use std::rc::Rc;

use dioxus::prelude::*;
use marque_domain::{BackspaceEffect, PastePolicy, VerificationFlow};

/// What an input event's value means for the slot it landed in.
#[derive(Debug, PartialEq, Eq)]
enum SlotEntry {
    /// Replace or clear this slot only.
    Edit(String),
    /// Distribute the value across the code from slot 0.
    Paste,
}

/// Classify an input event.
///
/// Values of one character or none edit the slot directly. A two-character
/// value on a slot that already held a digit is an overtype: the field
/// reports the old and new characters together, so the newly typed one is
/// picked out and kept on the single-slot path. Anything longer, or a
/// multi-character value landing in an empty slot, is pasted text.
fn entry_for_slot(raw: &str, current: Option<char>) -> SlotEntry {
    let mut chars = raw.chars();
    let (first, second) = (chars.next(), chars.next());
    if chars.next().is_some() {
        return SlotEntry::Paste;
    }
    match (first, second, current) {
        (Some(a), Some(b), Some(held)) => {
            let typed = if a == held { b } else { a };
            SlotEntry::Edit(typed.to_string())
        }
        (Some(_), Some(_), None) => SlotEntry::Paste,
        _ => SlotEntry::Edit(raw.to_string()),
    }
}

/// Fixed-length digit entry bound to a verification flow
#[component]
pub fn CodeInput(
    mut flow: Signal<VerificationFlow>,
    #[props(default)] paste_policy: PastePolicy,
) -> Element {
    let len = flow.read().code().len();
    let mut mounts: Signal<Vec<Option<Rc<MountedData>>>> = use_signal(|| vec![None; len]);

    let focus_slot = move |index: usize| {
        let handle = mounts.read().get(index).cloned().flatten();
        if let Some(handle) = handle {
            spawn(async move {
                let _ = handle.set_focus(true).await;
            });
        }
    };

    let disabled = flow.read().is_submitting();

    rsx! {
        div {
            class: "code-input flex gap-2 justify-center",

            for i in 0..len {
                input {
                    key: "{i}",
                    r#type: "text",
                    inputmode: "numeric",
                    autocomplete: if i == 0 { "one-time-code" } else { "off" },
                    value: flow.read().code().slot_display(i),
                    disabled,
                    class: "w-10 h-12 text-center text-xl bg-dark-bg border border-gray-700 rounded text-white",
                    onmounted: move |e| {
                        mounts.write()[i] = Some(e.data());
                    },
                    oninput: move |e| {
                        let raw = e.value();
                        let current = flow.read().code().slot(i);
                        let target = match entry_for_slot(&raw, current) {
                            SlotEntry::Edit(value) => {
                                flow.write().code_mut().set_digit(i, &value)
                            }
                            SlotEntry::Paste => {
                                flow.write().code_mut().paste(&raw, paste_policy)
                            }
                        };
                        if let Some(next) = target {
                            focus_slot(next);
                        }
                    },
                    onkeydown: move |e| {
                        if e.key() == Key::Backspace {
                            match flow.write().code_mut().backspace(i) {
                                BackspaceEffect::MovedTo(prev) => {
                                    e.prevent_default();
                                    focus_slot(prev);
                                }
                                BackspaceEffect::ClearedCurrent => e.prevent_default(),
                                BackspaceEffect::None => {}
                            }
                        }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{entry_for_slot, SlotEntry};
    use marque_domain::{PastePolicy, SegmentedCode};

    #[test]
    fn single_characters_edit_the_slot() {
        assert_eq!(entry_for_slot("7", None), SlotEntry::Edit("7".into()));
        assert_eq!(entry_for_slot("7", Some('3')), SlotEntry::Edit("7".into()));
        assert_eq!(entry_for_slot("", Some('3')), SlotEntry::Edit(String::new()));
    }

    #[test]
    fn overtyping_a_filled_slot_picks_the_new_character() {
        // The field reports old + new together, in either order.
        assert_eq!(entry_for_slot("39", Some('3')), SlotEntry::Edit("9".into()));
        assert_eq!(entry_for_slot("93", Some('3')), SlotEntry::Edit("9".into()));
        assert_eq!(entry_for_slot("99", Some('9')), SlotEntry::Edit("9".into()));
    }

    #[test]
    fn longer_values_and_empty_slot_pairs_are_pastes() {
        assert_eq!(entry_for_slot("123456", Some('1')), SlotEntry::Paste);
        assert_eq!(entry_for_slot("345", None), SlotEntry::Paste);
        assert_eq!(entry_for_slot("12", None), SlotEntry::Paste);
    }

    #[test]
    fn overtype_on_a_filled_slot_never_shifts_neighbors() {
        let mut code = SegmentedCode::new();
        code.paste("123456", PastePolicy::KeepRemainder);
        match entry_for_slot("39", code.slot(2)) {
            SlotEntry::Edit(value) => {
                code.set_digit(2, &value);
            }
            SlotEntry::Paste => panic!("overtype must stay on the single-slot path"),
        }
        assert_eq!(code.value().as_deref(), Some("129456"));
    }
}
