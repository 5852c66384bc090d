//! Session configuration

use crate::bank::SubjectFilter;
use crate::error::{QuizError, Result};

/// Configuration for one quiz session, immutable once the session starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Which subjects to draw from
    pub subject_filter: SubjectFilter,
    /// Requested number of questions; the filtered pool size caps it
    pub question_count: usize,
    /// Time limit in minutes; 0 means unlimited
    pub time_limit_minutes: u32,
}

impl SessionConfig {
    pub fn new(
        subject_filter: SubjectFilter,
        question_count: usize,
        time_limit_minutes: u32,
    ) -> Self {
        Self {
            subject_filter,
            question_count,
            time_limit_minutes,
        }
    }

    /// Time limit in seconds, or `None` for an unlimited session
    pub fn time_limit_seconds(&self) -> Option<u32> {
        (self.time_limit_minutes > 0).then(|| self.time_limit_minutes * 60)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.question_count == 0 {
            return Err(QuizError::InvalidConfig(
                "question count must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    /// Setup-form defaults: all subjects, 20 questions, 30 minutes
    fn default() -> Self {
        Self::new(SubjectFilter::All, 20, 30)
    }
}
