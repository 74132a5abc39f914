//! The imperative shell around the pure core.
//!
//! This module performs the side effects the core only describes:
//! evaluating expressions on the remote service, persisting history and
//! memory, and reading the clock for transient notices.
//!
//! # Key Concepts
//!
//! - **Evaluator**: the remote calculation service behind an async trait
//! - **Session**: single-flight submissions with monotonically numbered tickets
//! - **Calculator**: one command API over state, history, memory and storage
//! - **Effects**: evaluation is a Stillwater effect run against a [`SessionEnv`]

mod calculator;
mod display;
mod evaluator;
mod session;

pub use calculator::{Calculator, NoticeTimings};
pub use display::DisplaySnapshot;
pub use evaluator::{Evaluator, HttpEvaluator, SessionError};
pub use session::{CalculationSession, SessionEnv, Submission};
