//! Property-based tests for the button evaluator

#![allow(clippy::unwrap_used)]

use keypad_calculator::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = Button> {
    (0u8..=9u8).prop_map(|d| Button::from_digit(d).unwrap())
}

fn operator_strategy() -> impl Strategy<Value = Button> {
    prop_oneof![
        Just(Button::Add),
        Just(Button::Subtract),
        Just(Button::Multiply),
        Just(Button::Divide),
    ]
}

fn any_button_strategy() -> impl Strategy<Value = Button> {
    proptest::sample::select(Button::ALL.to_vec())
}

fn digits_to_string(digits: &[Button]) -> String {
    let raw: String = digits.iter().map(|b| b.label()).collect();
    let trimmed = raw.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

proptest! {
    /// Digits typed after clear concatenate, leading zeros collapsing
    #[test]
    fn prop_digit_entry_concatenates(
        prefix in prop::collection::vec(any_button_strategy(), 0..10),
        digits in prop::collection::vec(digit_strategy(), 1..12),
    ) {
        let mut eval = Evaluator::new();
        eval.press_all(prefix);
        eval.handle_button(Button::Clear);
        let shown = eval.press_all(digits.iter().copied()).to_string();
        prop_assert_eq!(shown, digits_to_string(&digits));
    }

    /// Operator then equals with no digits in between applies op(stored, 0)
    #[test]
    fn prop_add_then_equals_returns_stored(digits in prop::collection::vec(digit_strategy(), 1..10)) {
        let mut eval = Evaluator::new();
        eval.press_all(digits.iter().copied());
        let before = eval.display().parse::<f64>().unwrap();
        eval.handle_button(Button::Add);
        let stored = eval.stored();
        prop_assert_eq!(stored, before);
        let shown = eval.handle_button(Button::Equal).parse::<f64>().unwrap();
        prop_assert_eq!(shown, stored);
    }

    /// Equals leaves the pending operation and stored operand untouched
    #[test]
    fn prop_equals_preserves_pending(
        lhs in prop::collection::vec(digit_strategy(), 1..6),
        op in operator_strategy(),
        rhs in prop::collection::vec(digit_strategy(), 1..6),
    ) {
        let mut eval = Evaluator::new();
        eval.press_all(lhs);
        eval.handle_button(op);
        let pending = eval.pending();
        let stored = eval.stored();
        eval.press_all(rhs);
        eval.handle_button(Button::Equal);
        prop_assert_eq!(eval.pending(), pending);
        prop_assert_eq!(eval.stored(), stored);
    }

    /// Repeated equals applies the same operation to the same stored operand
    #[test]
    fn prop_repeated_equals_same_arithmetic(
        lhs in prop::collection::vec(digit_strategy(), 1..4),
        op in operator_strategy(),
        rhs in prop::collection::vec(digit_strategy(), 1..4),
    ) {
        let mut eval = Evaluator::new();
        eval.press_all(lhs);
        eval.handle_button(op);
        eval.press_all(rhs);
        eval.handle_button(Button::Equal);

        let expected = eval.pending_evaluation().map(|e| e.result);
        let shown = eval.handle_button(Button::Equal).to_string();
        let expected = expected.map(|v| format!("{v}"));
        prop_assert_eq!(Some(shown), expected);
    }

    /// Inert buttons never change any state field
    #[test]
    fn prop_inert_buttons_change_nothing(
        prefix in prop::collection::vec(any_button_strategy(), 0..15),
        inert in prop_oneof![Just(Button::Decimal), Just(Button::Percent), Just(Button::Negative)],
    ) {
        let mut eval = Evaluator::new();
        eval.press_all(prefix);
        let before = eval.snapshot();
        eval.handle_button(inert);
        let after = eval.snapshot();
        prop_assert_eq!(after.display, before.display);
        prop_assert_eq!(after.pending, before.pending);
        // NaN-safe comparison of the stored operand
        prop_assert_eq!(after.stored.to_bits(), before.stored.to_bits());
    }

    /// Clear always shows "0", whatever came before
    #[test]
    fn prop_clear_shows_zero(prefix in prop::collection::vec(any_button_strategy(), 0..20)) {
        let mut eval = Evaluator::new();
        eval.press_all(prefix);
        prop_assert_eq!(eval.handle_button(Button::Clear), "0");
        prop_assert_eq!(eval.phase(), Phase::Idle);
    }

    /// The headless driver and the bare evaluator agree on every sequence
    #[test]
    fn prop_driver_matches_evaluator(buttons in prop::collection::vec(any_button_strategy(), 0..25)) {
        let mut eval = Evaluator::new();
        let mut driver = HeadlessDriver::new();
        let expected = eval.press_all(buttons.iter().copied()).to_string();
        prop_assert_eq!(driver.press_all(&buttons), expected);
    }
}
