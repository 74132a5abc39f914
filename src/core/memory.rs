//! The single memory register.

use super::guard::Guard;
use super::number::format_number;
use super::state::{is_error_result, ZERO_RESULT};
use serde::{Deserialize, Serialize};

/// Operations that fold the current result into memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryOp {
    Store,
    Add,
    Subtract,
}

impl MemoryOp {
    /// Confirmation text shown after the operation applies `result`.
    pub fn confirmation(self, result: &str) -> String {
        match self {
            Self::Store => format!("Stored in memory: {result}"),
            Self::Add => format!("Added to memory: {result}"),
            Self::Subtract => format!("Subtracted from memory: {result}"),
        }
    }
}

/// A single numeric slot, zero by default.
///
/// # Example
///
/// ```rust
/// use calculon::core::{MemoryOp, MemoryRegister};
///
/// let memory = MemoryRegister::default()
///     .apply(MemoryOp::Store, 40.0)
///     .apply(MemoryOp::Add, 2.0);
/// assert_eq!(memory.value(), 42.0);
/// assert_eq!(memory.to_string(), "42");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryRegister {
    value: f64,
}

impl MemoryRegister {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Apply an operation with the given operand, returning the new register.
    pub fn apply(self, op: MemoryOp, operand: f64) -> Self {
        let value = match op {
            MemoryOp::Store => operand,
            MemoryOp::Add => self.value + operand,
            MemoryOp::Subtract => self.value - operand,
        };
        Self { value }
    }

    pub fn cleared() -> Self {
        Self::default()
    }

    /// Guard admitting results that memory operations may use.
    ///
    /// Rejects the empty string, the untouched `"0"` result and error reports.
    pub fn result_guard() -> Guard<str> {
        Guard::new(|result: &str| !result.is_empty())
            .and(Guard::new(|result: &str| result != ZERO_RESULT))
            .and(Guard::new(|result: &str| !is_error_result(result)))
    }

    /// Numeric operand for a result, if memory may use it.
    pub fn operand(result: &str) -> Option<f64> {
        if !Self::result_guard().check(result) {
            return None;
        }
        result
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }

    /// Parse a persisted value; anything unusable reads as zero.
    pub fn parse(stored: &str) -> Self {
        let value = stored
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .unwrap_or_default();
        Self { value }
    }
}

impl std::fmt::Display for MemoryRegister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_number(self.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(MemoryRegister::default().value(), 0.0);
    }

    #[test]
    fn apply_store_add_subtract() {
        let memory = MemoryRegister::default();
        let memory = memory.apply(MemoryOp::Store, 10.0);
        assert_eq!(memory.value(), 10.0);
        let memory = memory.apply(MemoryOp::Add, 5.5);
        assert_eq!(memory.value(), 15.5);
        let memory = memory.apply(MemoryOp::Subtract, 20.0);
        assert_eq!(memory.value(), -4.5);
    }

    #[test]
    fn cleared_is_zero() {
        assert_eq!(MemoryRegister::cleared(), MemoryRegister::new(0.0));
    }

    #[test]
    fn operand_rejects_ineligible_results() {
        assert_eq!(MemoryRegister::operand("0"), None);
        assert_eq!(MemoryRegister::operand(""), None);
        assert_eq!(MemoryRegister::operand("Error: Division by zero"), None);
        assert_eq!(MemoryRegister::operand("not a number"), None);
        assert_eq!(MemoryRegister::operand("inf"), None);
    }

    #[test]
    fn operand_parses_eligible_results() {
        assert_eq!(MemoryRegister::operand("42"), Some(42.0));
        assert_eq!(MemoryRegister::operand("-1.5"), Some(-1.5));
        assert_eq!(MemoryRegister::operand("1e+21"), Some(1e21));
        assert_eq!(MemoryRegister::operand("0.0"), Some(0.0));
    }

    #[test]
    fn parse_falls_back_to_zero() {
        assert_eq!(MemoryRegister::parse("12.5").value(), 12.5);
        assert_eq!(MemoryRegister::parse("garbage").value(), 0.0);
        assert_eq!(MemoryRegister::parse("NaN").value(), 0.0);
        assert_eq!(MemoryRegister::parse("").value(), 0.0);
    }

    #[test]
    fn confirmation_texts() {
        assert_eq!(MemoryOp::Store.confirmation("7"), "Stored in memory: 7");
        assert_eq!(MemoryOp::Add.confirmation("7"), "Added to memory: 7");
        assert_eq!(
            MemoryOp::Subtract.confirmation("7"),
            "Subtracted from memory: 7"
        );
    }

    #[test]
    fn display_uses_number_formatting() {
        assert_eq!(MemoryRegister::new(3.0).to_string(), "3");
        assert_eq!(MemoryRegister::new(0.1).to_string(), "0.1");
    }
}
