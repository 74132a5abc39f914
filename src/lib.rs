//! Calculon: a terminal calculator with a pure editing core
//!
//! Calculon is built on the "pure core, imperative shell" philosophy.
//! Expression editing, history and memory are pure transitions on plain
//! values, while evaluation on the remote service, persistence and the
//! terminal live in a thin shell around them.
//!
//! # Core Concepts
//!
//! - **State**: the pending expression, last result and new-calculation flag
//! - **History**: bounded, immutable log of past calculations
//! - **Memory**: a single persisted numeric register
//! - **Session**: single-flight evaluation as a Stillwater effect
//!
//! # Example
//!
//! ```rust
//! use calculon::core::Command;
//! use calculon::effects::{Calculator, NoticeTimings};
//! use calculon::storage::InMemoryStore;
//! use std::time::Instant;
//!
//! let mut calculator = Calculator::load(InMemoryStore::new(), NoticeTimings::default());
//! let now = Instant::now();
//!
//! for token in ["1", "2", "+", "3"] {
//!     calculator.dispatch(Command::Append(token.to_string()), now);
//! }
//! let submission = calculator.dispatch(Command::Submit, now).unwrap();
//! calculator.finish_submission(&submission, Ok("15".to_string()), now);
//!
//! let display = calculator.display(now);
//! assert_eq!(display.result, "15");
//! assert_eq!(display.summary.as_deref(), Some("12+3 = 15"));
//! ```

pub mod config;
pub mod core;
pub mod effects;
pub mod logging;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::core::{CalculatorState, Command, HistoryEntry, HistoryLog, MemoryRegister};
pub use crate::effects::{Calculator, CalculationSession, HttpEvaluator, SessionEnv};
