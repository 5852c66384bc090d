//! Question bank module
//!
//! Static, subject-tagged study content: multiple-choice questions and
//! flashcards. The bank is immutable after load; sessions draw from it
//! through read-only lookups.

mod loader;
mod question;

pub use loader::*;
pub use question::*;
