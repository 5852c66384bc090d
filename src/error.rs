//! Error types for the quiz engine core

use crate::session::Stage;
use thiserror::Error;

/// Main error type for the quiz engine core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("No questions in pool for filter: {0}")]
    EmptyPool(String),

    #[error("Operation not valid in {0:?} stage")]
    InvalidOperation(Stage),

    #[error("Option index out of range: {0}")]
    OptionOutOfRange(usize),

    #[error("Invalid session config: {0}")]
    InvalidConfig(String),

    #[error("Bank format error: {0}")]
    BankFormat(String),
}

/// Result type alias for the quiz engine core
pub type Result<T> = std::result::Result<T, QuizError>;
