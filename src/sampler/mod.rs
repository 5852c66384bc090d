//! Shuffle/sampler module
//!
//! Uniformly-random permutation and prefix sampling, used for drawing quiz
//! questions from the bank and for reordering flashcard decks.

mod shuffle;


pub use shuffle::*;
