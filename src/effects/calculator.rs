//! The calculator shell: state, history and memory behind one command API.

use crate::core::{
    CalculatorState, Command, HistoryEntry, HistoryLog, MemoryOp, MemoryRegister,
    TransientNotice, RECENT_VIEW_LEN,
};
use crate::effects::display::DisplaySnapshot;
use crate::effects::evaluator::SessionError;
use crate::effects::session::{CalculationSession, SessionEnv, Submission};
use crate::storage::{self, Store};
use std::time::{Duration, Instant};
use stillwater::effect::Effect;
use tracing::{debug, info, warn};

/// Lifetimes of the two notice channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoticeTimings {
    pub error: Duration,
    pub confirmation: Duration,
}

impl Default for NoticeTimings {
    fn default() -> Self {
        Self {
            error: Duration::from_secs(3),
            confirmation: Duration::from_secs(2),
        }
    }
}

/// One running calculator.
///
/// Owns the editing state, the persisted history and memory, and the
/// injected store they are written to. Every history or memory mutation is
/// persisted before the call returns; persistence failures are logged and
/// otherwise ignored.
pub struct Calculator<St: Store> {
    state: CalculatorState,
    history: HistoryLog,
    memory: MemoryRegister,
    store: St,
    session: CalculationSession,
    errors: TransientNotice,
    confirmations: TransientNotice,
}

impl<St: Store> Calculator<St> {
    /// Create a calculator, loading history and memory from `store`.
    pub fn load(store: St, timings: NoticeTimings) -> Self {
        let history = storage::load_history(&store);
        let memory = storage::load_memory(&store);
        debug!(entries = history.len(), memory = %memory, "loaded persisted state");
        Self {
            state: CalculatorState::new(),
            history,
            memory,
            store,
            session: CalculationSession::new(),
            errors: TransientNotice::new(timings.error),
            confirmations: TransientNotice::new(timings.confirmation),
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn memory(&self) -> MemoryRegister {
        self.memory
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    /// Apply one input command.
    ///
    /// `Submit` does not evaluate anything by itself: it returns the
    /// submission ticket, which the caller runs with
    /// [`CalculationSession::evaluate`] and hands back to
    /// [`finish_submission`](Self::finish_submission).
    pub fn dispatch(&mut self, command: Command, now: Instant) -> Option<Submission> {
        match command {
            Command::Append(token) => self.state.append(&token),
            Command::AppendFunction(name) => self.state.append_function(&name),
            Command::ClearAll => {
                self.state.clear_all();
                self.session.abandon();
            }
            Command::ClearEntry => self.state.clear_entry(),
            Command::Backspace => self.state.backspace(),
            Command::ToggleSign => self.state.toggle_sign(),
            Command::Factorial => {
                if let Err(e) = self.state.factorial() {
                    self.errors.show(e.to_string(), now);
                }
            }
            Command::Submit => return self.begin_submission(),
            Command::Memory(op) => self.apply_memory(op, now),
            Command::MemoryRecall => {
                self.state.recall(self.memory.value());
                self.confirmations
                    .show(format!("Memory recalled: {}", self.memory), now);
            }
            Command::MemoryClear => {
                self.memory = MemoryRegister::cleared();
                self.persist_memory();
                self.confirmations.show("Memory cleared", now);
            }
            Command::UseHistory(index) => self.use_history(index),
            Command::ClearHistory => {
                self.history = HistoryLog::new();
                if let Err(e) = storage::clear_history(&mut self.store) {
                    warn!(error = %e, "failed to remove persisted history");
                }
            }
        }
        None
    }

    fn begin_submission(&mut self) -> Option<Submission> {
        let submission = self.session.begin(self.state.expression())?;
        info!(id = submission.id(), expression = submission.expression(), "submitting");
        Some(submission)
    }

    /// Apply the outcome of a submission.
    ///
    /// Returns `false` when the outcome was stale (the submission had been
    /// abandoned) and nothing changed.
    pub fn finish_submission(
        &mut self,
        submission: &Submission,
        outcome: Result<String, SessionError>,
        now: Instant,
    ) -> bool {
        if !self.session.finish(submission) {
            return false;
        }

        match outcome {
            Ok(result) => {
                info!(id = submission.id(), result = %result, "evaluated");
                self.history = self
                    .history
                    .record(HistoryEntry::now(submission.expression(), result.as_str()));
                self.persist_history();
                self.state.complete(result);
            }
            Err(e) => {
                info!(id = submission.id(), error = %e, "evaluation failed");
                self.errors.show(e.to_string(), now);
            }
        }
        true
    }

    /// Submit the current expression and wait for its outcome.
    ///
    /// Returns `false` if nothing was submitted or the outcome was stale.
    pub async fn submit(&mut self, env: &SessionEnv) -> bool {
        let Some(submission) = self.dispatch(Command::Submit, Instant::now()) else {
            return false;
        };
        let outcome = CalculationSession::evaluate(&submission).run(env).await;
        self.finish_submission(&submission, outcome, Instant::now())
    }

    fn apply_memory(&mut self, op: MemoryOp, now: Instant) {
        let Some(operand) = MemoryRegister::operand(self.state.result()) else {
            return;
        };
        self.memory = self.memory.apply(op, operand);
        self.persist_memory();
        self.confirmations.show(op.confirmation(self.state.result()), now);
    }

    fn use_history(&mut self, index: usize) {
        if let Some(entry) = self.history.recent(RECENT_VIEW_LEN).get(index) {
            self.state.load_entry(&entry.expression, &entry.result);
        }
    }

    fn persist_history(&mut self) {
        if let Err(e) = storage::save_history(&mut self.store, &self.history) {
            warn!(error = %e, "failed to persist history");
        }
    }

    fn persist_memory(&mut self) {
        if let Err(e) = storage::save_memory(&mut self.store, self.memory) {
            warn!(error = %e, "failed to persist memory");
        }
    }

    /// Expire notices whose time is up. Returns whether the display changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let errors = self.errors.expire(now);
        let confirmations = self.confirmations.expire(now);
        errors || confirmations
    }

    /// The earliest pending notice deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.errors.deadline(), self.confirmations.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// What the display surface shows at `now`.
    pub fn display(&self, now: Instant) -> DisplaySnapshot {
        DisplaySnapshot {
            expression: self.state.display_expression().to_string(),
            result: self.state.result().to_string(),
            error: self.errors.current(now).map(str::to_string),
            confirmation: self.confirmations.current(now).map(str::to_string),
            summary: self.history.summary(),
            recent: self
                .history
                .recent(RECENT_VIEW_LEN)
                .into_iter()
                .cloned()
                .collect(),
            loading: self.session.is_loading(),
        }
    }
}
