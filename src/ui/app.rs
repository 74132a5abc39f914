//! Terminal event loop.

use super::keys::{action_for, KeyAction};
use super::render::render;
use crate::effects::{Calculator, CalculationSession, SessionEnv, SessionError, Submission};
use crate::storage::Store;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use stillwater::effect::Effect;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TryRecvError};

/// Upper bound on how long the loop waits for a key before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

type Outcome = (Submission, Result<String, SessionError>);

/// The interactive application.
///
/// Evaluations run as tasks on the tokio runtime; their outcomes come back
/// over a channel and are applied between key presses.
pub struct App<St: Store> {
    calculator: Calculator<St>,
    env: SessionEnv,
    runtime: Handle,
    outcome_tx: mpsc::UnboundedSender<Outcome>,
    outcome_rx: mpsc::UnboundedReceiver<Outcome>,
    should_quit: bool,
}

impl<St: Store> App<St> {
    pub fn new(calculator: Calculator<St>, env: SessionEnv, runtime: Handle) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            calculator,
            env,
            runtime,
            outcome_tx,
            outcome_rx,
            should_quit: false,
        }
    }

    pub fn calculator(&self) -> &Calculator<St> {
        &self.calculator
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            let now = Instant::now();
            self.calculator.tick(now);
            self.drain_outcomes(now);

            let snapshot = self.calculator.display(now);
            terminal.draw(|frame| render(frame, &snapshot))?;

            if self.should_quit {
                break;
            }

            if event::poll(self.poll_timeout(Instant::now()))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(action) = action_for(key) {
                            self.handle(action, Instant::now());
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        self.calculator
            .next_deadline()
            .map_or(POLL_INTERVAL, |deadline| {
                deadline.saturating_duration_since(now).min(POLL_INTERVAL)
            })
    }

    /// Apply a key action, spawning an evaluation for submissions.
    pub fn handle(&mut self, action: KeyAction, now: Instant) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Run(command) => {
                if let Some(submission) = self.calculator.dispatch(command, now) {
                    self.spawn_evaluation(submission);
                }
            }
        }
    }

    fn spawn_evaluation(&self, submission: Submission) {
        let env = self.env.clone();
        let outcome_tx = self.outcome_tx.clone();
        self.runtime.spawn(async move {
            let outcome = CalculationSession::evaluate(&submission).run(&env).await;
            // The receiver only goes away when the app is shutting down.
            let _ = outcome_tx.send((submission, outcome));
        });
    }

    /// Apply every outcome that has arrived. Returns whether any did.
    pub fn drain_outcomes(&mut self, now: Instant) -> bool {
        let mut applied = false;
        loop {
            match self.outcome_rx.try_recv() {
                Ok((submission, outcome)) => {
                    self.calculator.finish_submission(&submission, outcome, now);
                    applied = true;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        applied
    }

    /// Wait for the next outcome and apply it.
    pub async fn next_outcome(&mut self) -> bool {
        match self.outcome_rx.recv().await {
            Some((submission, outcome)) => {
                self.calculator
                    .finish_submission(&submission, outcome, Instant::now())
            }
            None => false,
        }
    }
}
