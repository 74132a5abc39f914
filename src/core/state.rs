//! Calculator state held by one interactive session.
//!
//! The state is a plain value: every editing operation is a pure transition
//! on it, and nothing here performs I/O.

use serde::{Deserialize, Serialize};

/// Result shown before anything has been calculated, and after `clear_all`.
pub const ZERO_RESULT: &str = "0";

/// Prefix the evaluation service uses for results that are error reports.
pub const ERROR_MARKER: &str = "Error";

/// The pending expression, the last result, and the new-calculation flag.
///
/// When `is_new_calculation` is set, the next digit or function input
/// replaces the expression instead of extending it.
///
/// # Example
///
/// ```rust
/// use calculon::core::CalculatorState;
///
/// let state = CalculatorState::new();
/// assert_eq!(state.expression(), "");
/// assert_eq!(state.display_expression(), "0");
/// assert_eq!(state.result(), "0");
/// assert!(state.is_new_calculation());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) expression: String,
    pub(crate) result: String,
    pub(crate) is_new_calculation: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Fresh state: empty expression, result `"0"`, new calculation pending.
    pub fn new() -> Self {
        Self {
            expression: String::new(),
            result: ZERO_RESULT.to_string(),
            is_new_calculation: true,
        }
    }

    /// The raw expression composed so far.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The expression as displayed: `"0"` stands in for an empty one.
    pub fn display_expression(&self) -> &str {
        if self.expression.is_empty() {
            ZERO_RESULT
        } else {
            &self.expression
        }
    }

    /// The last successful textual result.
    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn is_new_calculation(&self) -> bool {
        self.is_new_calculation
    }

    /// Record a successful evaluation. The next digit starts a fresh expression.
    pub fn complete(&mut self, result: impl Into<String>) {
        self.result = result.into();
        self.is_new_calculation = true;
    }
}

/// Whether a result string is an error report rather than a value.
pub fn is_error_result(result: &str) -> bool {
    result.starts_with(ERROR_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_fresh() {
        let state = CalculatorState::new();
        assert_eq!(state.expression(), "");
        assert_eq!(state.result(), ZERO_RESULT);
        assert!(state.is_new_calculation());
    }

    #[test]
    fn display_expression_substitutes_zero() {
        let mut state = CalculatorState::new();
        assert_eq!(state.display_expression(), "0");

        state.expression = "12+3".to_string();
        assert_eq!(state.display_expression(), "12+3");
    }

    #[test]
    fn complete_sets_result_and_flag() {
        let mut state = CalculatorState::new();
        state.expression = "2+2".to_string();
        state.is_new_calculation = false;

        state.complete("4");

        assert_eq!(state.result(), "4");
        assert_eq!(state.expression(), "2+2");
        assert!(state.is_new_calculation());
    }

    #[test]
    fn error_results_are_detected_by_prefix() {
        assert!(is_error_result("Error: Division by zero"));
        assert!(is_error_result("Error"));
        assert!(!is_error_result("42"));
        assert!(!is_error_result("error lowercase"));
    }

    #[test]
    fn state_serializes_correctly() {
        let mut state = CalculatorState::new();
        state.expression = "sin(1".to_string();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CalculatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
