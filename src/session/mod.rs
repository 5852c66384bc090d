//! Quiz session module
//!
//! The session state machine, its configuration, and the engine facade that
//! owns the live session and its countdown task.

mod config;
mod engine;
mod state;


pub use config::*;
pub use engine::*;
pub use state::*;
