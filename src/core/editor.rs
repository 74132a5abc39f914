//! Expression editing transitions.
//!
//! Each operation mutates a [`CalculatorState`] in place and never fails
//! except `factorial`, whose error is display-only and leaves the state
//! untouched.

use super::number::{factorial, format_number, FACTORIAL_LIMIT};
use super::state::{CalculatorState, ZERO_RESULT};
use thiserror::Error;

/// Errors raised by editing operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("Factorial limit exceeded")]
    FactorialLimitExceeded,
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// The trailing run of digits and decimal points, i.e. the number being typed.
fn current_number(expression: &str) -> &str {
    let start = expression
        .char_indices()
        .rev()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.'))
        .map_or(0, |(i, c)| i + c.len_utf8());
    &expression[start..]
}

impl CalculatorState {
    /// Append an input token.
    ///
    /// A digit typed while a new calculation is pending replaces the
    /// expression. A decimal point is ignored when the number being typed
    /// already has one.
    ///
    /// ```rust
    /// use calculon::core::CalculatorState;
    ///
    /// let mut state = CalculatorState::new();
    /// for token in ["1", ".", "5", ".", "+", "2", "."] {
    ///     state.append(token);
    /// }
    /// assert_eq!(state.expression(), "1.5+2.");
    /// ```
    pub fn append(&mut self, token: &str) {
        if self.is_new_calculation && is_digits(token) {
            self.expression.clear();
            self.is_new_calculation = false;
        }

        if token == "." && current_number(&self.expression).contains('.') {
            return;
        }

        self.expression.push_str(token);
    }

    /// Append a function token such as `sin(`.
    ///
    /// Any function input starts a fresh expression while a new calculation
    /// is pending.
    pub fn append_function(&mut self, name: &str) {
        if self.is_new_calculation {
            self.expression.clear();
            self.is_new_calculation = false;
        }
        self.expression.push_str(name);
    }

    /// Reset expression and result.
    pub fn clear_all(&mut self) {
        self.expression.clear();
        self.result = ZERO_RESULT.to_string();
        self.is_new_calculation = true;
    }

    /// Drop the expression, keeping the result.
    pub fn clear_entry(&mut self) {
        self.expression.clear();
    }

    /// Remove the last character, if any.
    pub fn backspace(&mut self) {
        self.expression.pop();
    }

    /// Prepend or strip a leading minus sign. Empty expressions are left alone.
    pub fn toggle_sign(&mut self) {
        if self.expression.is_empty() {
            return;
        }
        if let Some(rest) = self.expression.strip_prefix('-') {
            self.expression = rest.to_string();
        } else {
            self.expression.insert(0, '-');
        }
    }

    /// Replace an integer literal in `0..=170` with its factorial.
    ///
    /// Expressions that are not a single number are ignored. Numbers outside
    /// the range (negative, fractional, too large) are rejected and the
    /// expression is kept as it was.
    pub fn factorial(&mut self) -> Result<(), EditorError> {
        let literal = self.expression.trim();
        if literal.is_empty() {
            return Ok(());
        }
        let Ok(value) = literal.parse::<f64>() else {
            return Ok(());
        };

        let in_range = value.fract() == 0.0 && (0.0..=f64::from(FACTORIAL_LIMIT)).contains(&value);
        if !in_range {
            return Err(EditorError::FactorialLimitExceeded);
        }

        // in range, so the cast is exact
        let n = value as u32;
        let product = factorial(n).ok_or(EditorError::FactorialLimitExceeded)?;
        self.expression = format_number(product);
        Ok(())
    }

    /// Load a past calculation for further editing.
    ///
    /// The new-calculation flag is left as is, so typing continues the
    /// loaded expression unless a calculation had just completed.
    pub fn load_entry(&mut self, expression: &str, result: &str) {
        self.expression = expression.to_string();
        self.result = result.to_string();
    }

    /// Replace the expression with a recalled value.
    pub fn recall(&mut self, value: f64) {
        self.expression = format_number(value);
    }
}
