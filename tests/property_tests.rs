//! Property-based tests for the calculator core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use calculon::core::{CalculatorState, HistoryEntry, HistoryLog, HISTORY_CAPACITY, RECENT_VIEW_LEN};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_token()(variant in 0..17u8) -> &'static str {
        const TOKENS: [&str; 17] = [
            "0", "1", "2", "3", "4", "5", "6", "7", "8", "9",
            ".", "+", "-", "*", "/", "(", ")",
        ];
        TOKENS[variant as usize]
    }
}

fn typed(tokens: &[&str]) -> CalculatorState {
    let mut state = CalculatorState::new();
    for token in tokens {
        state.append(token);
    }
    state
}

/// Split an expression into the literals between operators.
fn numbers(expression: &str) -> Vec<&str> {
    expression
        .split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .collect()
}

proptest! {
    #[test]
    fn no_number_has_two_decimal_points(tokens in prop::collection::vec(arbitrary_token(), 0..40)) {
        let state = typed(&tokens);
        for number in numbers(state.expression()) {
            prop_assert!(number.matches('.').count() <= 1, "{} in {}", number, state.expression());
        }
    }

    #[test]
    fn backspace_removes_exactly_one_char(tokens in prop::collection::vec(arbitrary_token(), 0..20)) {
        let mut state = typed(&tokens);
        let before = state.expression().chars().count();

        state.backspace();

        let after = state.expression().chars().count();
        prop_assert_eq!(after, before.saturating_sub(1));
    }

    #[test]
    fn toggle_sign_is_an_involution(tokens in prop::collection::vec(arbitrary_token(), 1..20)) {
        let mut state = typed(&tokens);
        // stripping one '-' from "--x" or "-" cannot be undone by prepending
        prop_assume!(!state.expression().starts_with("--") && state.expression() != "-");
        let original = state.clone();

        state.toggle_sign();
        state.toggle_sign();

        prop_assert_eq!(state, original);
    }

    #[test]
    fn append_never_touches_result(tokens in prop::collection::vec(arbitrary_token(), 0..20)) {
        let state = typed(&tokens);
        prop_assert_eq!(state.result(), "0");
    }

    #[test]
    fn factorial_within_limit_never_errors(n in 0u32..=170) {
        let literal = n.to_string();
        let mut state = typed(&[literal.as_str()]);
        prop_assert!(state.factorial().is_ok());
        prop_assert_ne!(state.expression(), "");
    }

    #[test]
    fn factorial_beyond_limit_keeps_expression(n in 171u32..100_000) {
        let literal = n.to_string();
        let mut state = typed(&[literal.as_str()]);
        prop_assert!(state.factorial().is_err());
        prop_assert_eq!(state.expression(), literal.as_str());
    }

    #[test]
    fn history_is_bounded_and_ordered(count in 0usize..120) {
        let log = (0..count).fold(HistoryLog::new(), |log, i| {
            log.record(HistoryEntry::new(i.to_string(), i.to_string(), "ts"))
        });

        prop_assert_eq!(log.len(), count.min(HISTORY_CAPACITY));
        let first_kept = count.saturating_sub(HISTORY_CAPACITY);
        for (offset, entry) in log.entries().iter().enumerate() {
            prop_assert_eq!(&entry.expression, &(first_kept + offset).to_string());
        }

        let recent = log.recent(RECENT_VIEW_LEN);
        prop_assert_eq!(recent.len(), count.min(RECENT_VIEW_LEN));
        for (offset, entry) in recent.iter().enumerate() {
            prop_assert_eq!(&entry.expression, &(count - 1 - offset).to_string());
        }
    }

    #[test]
    fn history_record_is_pure(count in 0usize..60) {
        let log = (0..count).fold(HistoryLog::new(), |log, i| {
            log.record(HistoryEntry::new(i.to_string(), "r", "ts"))
        });
        let before = log.clone();

        let _ = log.record(HistoryEntry::new("x", "y", "ts"));

        prop_assert_eq!(log, before);
    }
}

#[test]
fn fifty_one_appends_keep_entries_two_to_fifty_one() {
    let log = (1..=51).fold(HistoryLog::new(), |log, i| {
        log.record(HistoryEntry::new(format!("e{i}"), i.to_string(), "ts"))
    });

    assert_eq!(log.len(), 50);
    let expressions: Vec<_> = log.entries().iter().map(|e| e.expression.clone()).collect();
    let expected: Vec<_> = (2..=51).map(|i| format!("e{i}")).collect();
    assert_eq!(expressions, expected);
}
