//! Quiz engine facade
//!
//! Owns the live session and its countdown task, and exposes the setup,
//! in-progress, and results operations to the caller. External consumers
//! never touch session fields directly; they receive snapshot values.

use crate::bank::QuestionBank;
use crate::error::{QuizError, Result};
use crate::session::{
    FinishReason, QuizSession, SessionConfig, SessionSummary, SessionView, Stage,
};
use crate::timer::CountdownTimer;
use parking_lot::Mutex;
use std::sync::Arc;

/// Session handle shared between the engine and the countdown task
///
/// The mutex serializes timer ticks against user-triggered operations, so at
/// most one session mutation is ever in flight.
pub type SharedSession = Arc<Mutex<QuizSession>>;

/// Facade over the session state machine and the timer subsystem
#[derive(Default)]
pub struct QuizEngine {
    session: Option<SharedSession>,
    timer: Option<CountdownTimer>,
}

impl QuizEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stage; [`Stage::Setup`] while no session exists
    pub fn stage(&self) -> Stage {
        self.session
            .as_ref()
            .map(|s| s.lock().stage())
            .unwrap_or(Stage::Setup)
    }

    /// Start a new session, replacing (and cancelling the timer of) any
    /// previous one
    ///
    /// Time-limited configs spawn the countdown task, so they must be called
    /// from within a tokio runtime; unlimited configs never spawn.
    pub fn start(&mut self, bank: &QuestionBank, config: &SessionConfig) -> Result<SharedSession> {
        self.reset();

        let session: SharedSession = Arc::new(Mutex::new(QuizSession::start(bank, config)?));
        if session.lock().remaining_seconds().is_some() {
            self.timer = Some(CountdownTimer::spawn(Arc::clone(&session)));
        }
        self.session = Some(Arc::clone(&session));
        Ok(session)
    }

    /// Record an answer for the current question
    pub fn submit_answer(&self, option_index: usize) -> Result<()> {
        match self.session {
            Some(ref session) => session.lock().submit_answer(option_index),
            None => Err(QuizError::InvalidOperation(Stage::Setup)),
        }
    }

    /// Move to the next question, clamped at the end
    pub fn advance(&self) {
        if let Some(ref session) = self.session {
            session.lock().advance();
        }
    }

    /// Move to the previous question, clamped at the start
    pub fn retreat(&self) {
        if let Some(ref session) = self.session {
            session.lock().retreat();
        }
    }

    /// Submit the quiz: compute the score and enter the results stage
    ///
    /// Cancels the countdown task. Idempotent once in results.
    pub fn finish(&mut self) -> Result<SessionSummary> {
        let Some(ref session) = self.session else {
            return Err(QuizError::InvalidOperation(Stage::Setup));
        };
        let summary = session.lock().finish(FinishReason::Submitted)?.clone();
        self.cancel_timer();
        Ok(summary)
    }

    /// Discard the session and return to setup
    pub fn reset(&mut self) {
        self.cancel_timer();
        self.session = None;
    }

    /// Snapshot of the current question, if a session exists
    pub fn view(&self) -> Option<SessionView> {
        self.session.as_ref().map(|s| s.lock().view())
    }

    /// The frozen summary, once the session has finished
    pub fn summary(&self) -> Option<SessionSummary> {
        self.session
            .as_ref()
            .and_then(|s| s.lock().summary().cloned())
    }

    /// Handle to the live session, if any
    pub fn session(&self) -> Option<SharedSession> {
        self.session.as_ref().map(Arc::clone)
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}
