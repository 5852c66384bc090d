//! Study Quiz Core - quiz and flashcard engine for a study companion
//!
//! This crate holds the stateful core of a study companion app: timed
//! multiple-choice quiz sessions drawn from a static in-memory question
//! bank, and flashcard drills, with no network or persistence layer.
//! Display layers are external consumers that hand in a [`session::SessionConfig`]
//! and user events, and receive read-only snapshots back; every session
//! mutation goes through the engine operations.

pub mod bank;
pub mod deck;
pub mod error;
pub mod sampler;
pub mod session;
pub mod timer;
