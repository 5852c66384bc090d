//! Flashcard deck module
//!
//! Cursor, flip, and known-mark state for drilling one subject's flashcards.

mod state;

pub use state::*;
