//! Single-flight submission of expressions to the evaluator.

use crate::effects::evaluator::{Evaluator, SessionError};
use std::sync::Arc;
use stillwater::effect::Effect;
use stillwater::prelude::*;
use tracing::debug;

/// Environment the evaluation effect runs in.
#[derive(Clone)]
pub struct SessionEnv {
    evaluator: Arc<dyn Evaluator>,
}

impl SessionEnv {
    pub fn new(evaluator: impl Evaluator + 'static) -> Self {
        Self {
            evaluator: Arc::new(evaluator),
        }
    }

    pub fn from_arc(evaluator: Arc<dyn Evaluator>) -> Self {
        Self { evaluator }
    }
}

/// Ticket for one submitted expression.
///
/// Ids increase monotonically; only the ticket matching the in-flight id
/// may apply its outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    id: u64,
    expression: String,
}

impl Submission {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }
}

/// Tracks the in-flight submission.
#[derive(Debug, Default)]
pub struct CalculationSession {
    last_id: u64,
    in_flight: Option<u64>,
}

impl CalculationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submission awaits its outcome.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a submission.
    ///
    /// Returns `None` for an empty expression, or while another submission
    /// is still in flight.
    pub fn begin(&mut self, expression: &str) -> Option<Submission> {
        if expression.is_empty() {
            return None;
        }
        if let Some(id) = self.in_flight {
            debug!(in_flight = id, "submission already in flight");
            return None;
        }

        self.last_id += 1;
        self.in_flight = Some(self.last_id);
        Some(Submission {
            id: self.last_id,
            expression: expression.to_string(),
        })
    }

    /// Forget the in-flight submission; its outcome will be discarded.
    pub fn abandon(&mut self) {
        if let Some(id) = self.in_flight.take() {
            debug!(id, "abandoned in-flight submission");
        }
    }

    /// Close a submission. Returns `false` if its outcome is stale.
    pub fn finish(&mut self, submission: &Submission) -> bool {
        if self.in_flight != Some(submission.id) {
            debug!(id = submission.id, "discarding stale outcome");
            return false;
        }
        self.in_flight = None;
        true
    }

    /// Effect that sends the submission to the environment's evaluator.
    ///
    /// The effect borrows nothing from the session, so it can be run on a
    /// separate task while the session keeps handling input.
    pub fn evaluate(
        submission: &Submission,
    ) -> impl Effect<Output = String, Error = SessionError, Env = SessionEnv> {
        let expression = submission.expression.clone();
        from_async(move |env: &SessionEnv| {
            let evaluator = Arc::clone(&env.evaluator);
            let expression = expression.clone();
            async move { evaluator.evaluate(&expression).await }
        })
    }
}
