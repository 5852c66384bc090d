//! Quiz session state machine

use crate::bank::{Question, QuestionBank, OPTION_COUNT};
use crate::error::{QuizError, Result};
use crate::sampler;
use crate::session::SessionConfig;
use rand::Rng;
use smallvec::{smallvec, SmallVec};

/// Coarse lifecycle stage of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Setup,
    InProgress,
    Results,
}

/// How a session reached the results stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// Explicit submit by the user
    Submitted,
    /// The countdown reached zero
    TimeExpired,
}

/// One answer slot: the chosen option index, or `None` while unanswered
pub type Answer = Option<usize>;

/// Outcome of a single one-second tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Time was decremented; carries the remaining seconds
    Ticked(u32),
    /// The countdown hit zero and forced the session to finish
    Expired,
    /// Nothing to do: untimed session, or the stage already left in-progress
    Idle,
}

/// Frozen result of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Percentage score in [0, 100]
    pub score: u8,
    pub correct_count: usize,
    pub incorrect_count: usize,
    /// Per-question correctness, in question order
    pub correctness: Vec<bool>,
    pub reason: FinishReason,
}

/// Read-only snapshot of the current question for a display layer
#[derive(Debug, Clone)]
pub struct SessionView {
    pub prompt: String,
    pub options: [String; OPTION_COUNT],
    /// 1-based position for "Question X of Y"
    pub position: usize,
    pub total: usize,
    pub chosen: Answer,
    /// Correct option index, exposed only once the slot is answered
    pub correct_option: Option<usize>,
    /// Remaining time formatted `MM:SS`; `None` for unlimited sessions
    pub remaining_display: Option<String>,
}

/// Format a second count as `MM:SS`
pub fn format_mmss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// One quiz attempt from start to results
///
/// The session is the only mutable entity in the engine. All mutation goes
/// through the operations below; display layers receive snapshot values via
/// [`QuizSession::view`] and [`QuizSession::summary`].
///
/// # Invariants
/// - `answers.len() == questions.len()` at every point after start
/// - `current_index` stays inside `[0, questions.len())`
/// - each answer slot is written at most once
/// - once the stage reaches [`Stage::Results`], questions, answers and the
///   summary are frozen
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    answers: SmallVec<[Answer; 32]>,
    current_index: usize,
    remaining_seconds: Option<u32>,
    stage: Stage,
    summary: Option<SessionSummary>,
}

impl QuizSession {
    /// Start a session by drawing a shuffled subset from the bank
    ///
    /// Filters the bank by the config's subject filter and samples up to
    /// `question_count` questions. A requested count larger than the filtered
    /// pool silently caps the session length; an empty pool is an error and
    /// no session is created.
    pub fn start(bank: &QuestionBank, config: &SessionConfig) -> Result<Self> {
        Self::start_with_rng(bank, config, &mut rand::thread_rng())
    }

    /// Like [`QuizSession::start`], with a caller-supplied RNG for
    /// deterministic draws
    pub fn start_with_rng<R: Rng>(
        bank: &QuestionBank,
        config: &SessionConfig,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;

        let pool = bank.questions(config.subject_filter);
        if pool.is_empty() {
            return Err(QuizError::EmptyPool(config.subject_filter.to_string()));
        }

        let questions: Vec<Question> = sampler::sample_with_rng(&pool, config.question_count, rng)
            .into_iter()
            .cloned()
            .collect();

        Self::with_questions(questions, config.time_limit_seconds())
    }

    /// Build a session over an explicit, pre-ordered question list
    pub fn with_questions(
        questions: Vec<Question>,
        time_limit_seconds: Option<u32>,
    ) -> Result<Self> {
        if questions.is_empty() {
            return Err(QuizError::EmptyPool("explicit list".to_string()));
        }

        let answers: SmallVec<[Answer; 32]> = smallvec![None; questions.len()];
        Ok(Self {
            questions,
            answers,
            current_index: 0,
            remaining_seconds: time_limit_seconds,
            stage: Stage::InProgress,
            summary: None,
        })
    }

    /// Record the answer for the current question
    ///
    /// The first choice per slot is locked in: submitting again for an
    /// already-answered question is an `Ok` no-op, matching the
    /// show-feedback-then-advance interaction. Never moves the cursor.
    pub fn submit_answer(&mut self, option_index: usize) -> Result<()> {
        if self.stage != Stage::InProgress {
            return Err(QuizError::InvalidOperation(self.stage));
        }
        if option_index >= OPTION_COUNT {
            return Err(QuizError::OptionOutOfRange(option_index));
        }

        let slot = &mut self.answers[self.current_index];
        if slot.is_none() {
            *slot = Some(option_index);
        }
        Ok(())
    }

    /// Move the cursor forward, clamped to the last question
    ///
    /// Navigation is unrestricted regardless of answered state; a slot left
    /// unanswered counts as incorrect at scoring time.
    pub fn advance(&mut self) {
        if self.stage == Stage::InProgress && self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
        }
    }

    /// Move the cursor back, clamped to the first question
    pub fn retreat(&mut self) {
        if self.stage == Stage::InProgress {
            self.current_index = self.current_index.saturating_sub(1);
        }
    }

    /// Compute the final score and move to the results stage
    ///
    /// Valid from in-progress regardless of cursor position. Idempotent:
    /// finishing an already-finished session returns the frozen summary
    /// without recomputation (the original reason is kept).
    pub fn finish(&mut self, reason: FinishReason) -> Result<&SessionSummary> {
        // Frozen once set; summary is Some exactly when stage is Results
        if let Some(ref summary) = self.summary {
            return Ok(summary);
        }
        if self.stage != Stage::InProgress {
            return Err(QuizError::InvalidOperation(self.stage));
        }

        let correctness: Vec<bool> = self
            .questions
            .iter()
            .zip(self.answers.iter())
            .map(|(question, answer)| *answer == Some(question.answer))
            .collect();
        let correct_count = correctness.iter().filter(|&&c| c).count();
        let total = self.questions.len();
        let score = ((correct_count as f64 / total as f64) * 100.0).round() as u8;

        self.stage = Stage::Results;
        Ok(self.summary.insert(SessionSummary {
            score,
            correct_count,
            incorrect_count: total - correct_count,
            correctness,
            reason,
        }))
    }

    /// Decrement the countdown by one second
    ///
    /// The stage is checked at fire time, so a tick scheduled before the
    /// session finished is a guaranteed no-op. On reaching zero the session
    /// is force-finished with [`FinishReason::TimeExpired`].
    pub fn tick(&mut self) -> Tick {
        if self.stage != Stage::InProgress {
            return Tick::Idle;
        }
        let Some(remaining) = self.remaining_seconds else {
            return Tick::Idle;
        };

        let remaining = remaining.saturating_sub(1);
        self.remaining_seconds = Some(remaining);

        if remaining == 0 {
            let _ = self.finish(FinishReason::TimeExpired);
            Tick::Expired
        } else {
            Tick::Ticked(remaining)
        }
    }

    // ------------------------------------------------------------------------
    // Read-only accessors
    // ------------------------------------------------------------------------

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Number of questions drawn for this session
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Remaining seconds; `None` for unlimited sessions
    pub fn remaining_seconds(&self) -> Option<u32> {
        self.remaining_seconds
    }

    /// The frozen summary, present once the stage is [`Stage::Results`]
    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }

    /// The final score, defined only in the results stage
    pub fn score(&self) -> Option<u8> {
        self.summary.as_ref().map(|s| s.score)
    }

    /// Snapshot of the current question for a display layer
    pub fn view(&self) -> SessionView {
        let question = self.current_question();
        let chosen = self.answers[self.current_index];
        SessionView {
            prompt: question.prompt.clone(),
            options: question.options.clone(),
            position: self.current_index + 1,
            total: self.questions.len(),
            chosen,
            correct_option: chosen.map(|_| question.answer),
            remaining_display: self.remaining_seconds.map(format_mmss),
        }
    }
}
