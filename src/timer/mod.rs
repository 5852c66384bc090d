//! Timer subsystem module
//!
//! A cancellable scheduled task that ticks a session's countdown once per
//! second and forces completion on expiry.

mod countdown;

pub use countdown::*;
