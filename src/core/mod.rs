//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Calculator state and its editing transitions
//! - Guard predicates for transition control
//! - Bounded, immutable history and the memory register
//! - Transient notice channels and input commands
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod command;
mod editor;
mod guard;
mod history;
mod memory;
mod notice;
mod number;
mod state;

pub use command::{Command, Key};
pub use editor::EditorError;
pub use guard::Guard;
pub use history::{
    format_timestamp, HistoryEntry, HistoryLog, HISTORY_CAPACITY, RECENT_VIEW_LEN,
};
pub use memory::{MemoryOp, MemoryRegister};
pub use notice::TransientNotice;
pub use number::{factorial, format_number, FACTORIAL_LIMIT};
pub use state::{is_error_result, CalculatorState, ERROR_MARKER, ZERO_RESULT};
