//! Segmented code entry model.
//!
//! A fixed-length row of single-digit slots, as used by the email
//! verification screens. The model owns the slot values and computes a
//! focus target for each mutation; rendering and the actual focus move
//! are the UI's job.

use serde::{Deserialize, Serialize};

/// Number of slots in every verification code this app collects.
pub const CODE_LENGTH: usize = 6;

/// What happens to slots past the pasted digits when a paste is shorter
/// than the code. The two screens this model replaced disagreed, so both
/// behaviors stay selectable per call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PastePolicy {
    /// Leave trailing slots as they were.
    #[default]
    KeepRemainder,
    /// Empty every slot past the pasted digits.
    ClearRemainder,
}

/// Outcome of a backspace press in a given slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackspaceEffect {
    /// The slot itself held a digit and was cleared; focus stays put.
    ClearedCurrent,
    /// The slot was already empty; the previous slot was cleared and
    /// focus should move to it.
    MovedTo(usize),
    /// Nothing to do (empty slot at index 0).
    None,
}

/// A fixed-length numeric code under entry.
///
/// Every slot is either empty or one decimal digit. The slot count is set
/// at construction and never changes; no operation shifts neighboring
/// slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedCode {
    slots: Vec<Option<char>>,
}

impl SegmentedCode {
    /// Create an empty code with the given number of slots.
    pub fn with_length(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Create an empty code with the standard [`CODE_LENGTH`].
    pub fn new() -> Self {
        Self::with_length(CODE_LENGTH)
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no slot holds a digit.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// The digit at `index`, if any. Out-of-range indices read as empty.
    pub fn slot(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    /// The slot rendered as the string an input field should display.
    pub fn slot_display(&self, index: usize) -> String {
        self.slot(index).map(String::from).unwrap_or_default()
    }

    /// Accept a candidate value for one slot.
    ///
    /// Anything containing a non-digit character is dropped without
    /// touching the code (stray keystrokes are not worth interrupting
    /// the user over). An empty value clears the slot. On a stored digit
    /// the returned focus target is `index + 1`, unless this is already
    /// the last slot.
    pub fn set_digit(&mut self, index: usize, raw: &str) -> Option<usize> {
        if index >= self.slots.len() {
            return None;
        }
        if raw.is_empty() {
            self.slots[index] = None;
            return None;
        }
        if !raw.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        self.slots[index] = raw.chars().next();
        if index + 1 < self.slots.len() {
            Some(index + 1)
        } else {
            None
        }
    }

    /// Handle a backspace press in the slot at `index`.
    ///
    /// A backspace in an empty slot deletes backward: the previous slot
    /// is cleared and focus moves there. In a non-empty slot only that
    /// slot is cleared.
    pub fn backspace(&mut self, index: usize) -> BackspaceEffect {
        if index >= self.slots.len() {
            return BackspaceEffect::None;
        }
        if self.slots[index].is_some() {
            self.slots[index] = None;
            return BackspaceEffect::ClearedCurrent;
        }
        if index > 0 {
            self.slots[index - 1] = None;
            return BackspaceEffect::MovedTo(index - 1);
        }
        BackspaceEffect::None
    }

    /// Write pasted text into the code.
    ///
    /// Only decimal digits are kept, capped at the slot count, and written
    /// left-to-right from slot 0. Trailing slots follow `policy`. Returns
    /// the focus target: the last populated slot (the final slot on a full
    /// paste), or `None` when the text contained no digits, in which case
    /// the code is untouched.
    pub fn paste(&mut self, text: &str, policy: PastePolicy) -> Option<usize> {
        let digits: Vec<char> = text
            .chars()
            .filter(char::is_ascii_digit)
            .take(self.slots.len())
            .collect();
        if digits.is_empty() {
            return None;
        }
        for (i, d) in digits.iter().enumerate() {
            self.slots[i] = Some(*d);
        }
        if policy == PastePolicy::ClearRemainder {
            for slot in self.slots.iter_mut().skip(digits.len()) {
                *slot = None;
            }
        }
        Some(digits.len() - 1)
    }

    /// True iff every slot holds a digit.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The joined code, available only once every slot is filled.
    pub fn value(&self) -> Option<String> {
        self.slots.iter().copied().collect::<Option<String>>()
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }
}

impl Default for SegmentedCode {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(s: &str) -> SegmentedCode {
        let mut code = SegmentedCode::new();
        code.paste(s, PastePolicy::KeepRemainder);
        code
    }

    #[test]
    fn set_digit_stores_and_advances_focus() {
        let mut code = SegmentedCode::new();
        assert_eq!(code.set_digit(0, "4"), Some(1));
        assert_eq!(code.slot(0), Some('4'));
        assert_eq!(code.slot(1), None);
    }

    #[test]
    fn set_digit_on_last_slot_does_not_advance() {
        let mut code = SegmentedCode::new();
        assert_eq!(code.set_digit(5, "9"), None);
        assert_eq!(code.slot(5), Some('9'));
    }

    #[test]
    fn set_digit_rejects_non_digit_input() {
        for raw in ["a", " ", "x7", "7x", "-", "."] {
            let mut code = filled("12");
            let before = code.clone();
            assert_eq!(code.set_digit(2, raw), None, "input {raw:?}");
            assert_eq!(code, before, "input {raw:?} must leave the code unchanged");
        }
    }

    #[test]
    fn set_digit_with_empty_value_clears_slot() {
        let mut code = filled("123456");
        assert_eq!(code.set_digit(2, ""), None);
        assert_eq!(code.slot(2), None);
        assert!(!code.is_complete());
    }

    #[test]
    fn set_digit_out_of_range_is_a_no_op() {
        let mut code = SegmentedCode::new();
        assert_eq!(code.set_digit(6, "1"), None);
        assert!(code.is_empty());
    }

    #[test]
    fn set_digit_never_shifts_neighbors() {
        let mut code = filled("123456");
        code.set_digit(2, "9");
        assert_eq!(code.value().as_deref(), Some("129456"));
    }

    #[test]
    fn backspace_on_filled_slot_clears_only_that_slot() {
        let mut code = filled("123456");
        assert_eq!(code.backspace(3), BackspaceEffect::ClearedCurrent);
        assert_eq!(code.slot(3), None);
        assert_eq!(code.slot(2), Some('3'));
        assert_eq!(code.slot(4), Some('5'));
    }

    #[test]
    fn backspace_on_empty_slot_deletes_backward() {
        let mut code = filled("12");
        assert_eq!(code.backspace(2), BackspaceEffect::MovedTo(1));
        assert_eq!(code.slot(1), None);
        assert_eq!(code.slot(0), Some('1'));
    }

    #[test]
    fn backspace_on_empty_first_slot_does_nothing() {
        let mut code = SegmentedCode::new();
        assert_eq!(code.backspace(0), BackspaceEffect::None);
        assert!(code.is_empty());
    }

    #[test]
    fn paste_of_full_code_fills_and_focuses_last_slot() {
        let mut code = SegmentedCode::new();
        assert_eq!(code.paste("123456", PastePolicy::KeepRemainder), Some(5));
        assert_eq!(code.value().as_deref(), Some("123456"));
    }

    #[test]
    fn paste_filters_non_digits_and_caps_at_length() {
        let mut code = SegmentedCode::new();
        assert_eq!(code.paste("12a34b56789", PastePolicy::KeepRemainder), Some(5));
        assert_eq!(code.value().as_deref(), Some("123456"));
    }

    #[test]
    fn short_paste_keeps_remainder_under_keep_policy() {
        let mut code = filled("999999");
        assert_eq!(code.paste("12", PastePolicy::KeepRemainder), Some(1));
        assert_eq!(code.value().as_deref(), Some("129999"));
    }

    #[test]
    fn short_paste_clears_remainder_under_clear_policy() {
        let mut code = filled("999999");
        assert_eq!(code.paste("12", PastePolicy::ClearRemainder), Some(1));
        assert_eq!(code.slot(0), Some('1'));
        assert_eq!(code.slot(1), Some('2'));
        for i in 2..6 {
            assert_eq!(code.slot(i), None, "slot {i} should have been cleared");
        }
    }

    #[test]
    fn paste_without_digits_is_a_no_op() {
        let mut code = filled("12");
        let before = code.clone();
        assert_eq!(code.paste("hello, world", PastePolicy::ClearRemainder), None);
        assert_eq!(code, before);
    }

    #[test]
    fn completion_is_independent_of_fill_order() {
        for order in [[0, 1, 2, 3, 4, 5], [5, 4, 3, 2, 1, 0], [2, 0, 5, 1, 4, 3]] {
            let mut code = SegmentedCode::new();
            for (n, &i) in order.iter().enumerate() {
                assert!(!code.is_complete());
                code.set_digit(i, &n.to_string());
            }
            assert!(code.is_complete());
        }
    }

    #[test]
    fn value_is_none_until_complete() {
        let mut code = filled("12345");
        assert_eq!(code.value(), None);
        code.set_digit(5, "6");
        assert_eq!(code.value().as_deref(), Some("123456"));
    }

    #[test]
    fn clear_empties_every_slot() {
        let mut code = filled("123456");
        code.clear();
        assert!(code.is_empty());
        assert_eq!(code.len(), 6);
    }
}
