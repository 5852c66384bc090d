//! Cancellable one-second countdown task

use crate::session::{SharedSession, Tick};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// Handle to the countdown task driving a session's ticks
///
/// The task locks the shared session once per second and applies one tick.
/// It stops on its own as soon as a tick reports the session left the
/// in-progress stage, and [`CountdownTimer::cancel`] (or dropping the
/// handle) aborts it outright. Even if a tick races past cancellation, the
/// fire-time stage check inside [`crate::session::QuizSession::tick`] makes
/// it a no-op.
pub struct CountdownTimer {
    handle: JoinHandle<()>,
}

impl CountdownTimer {
    /// Spawn the countdown task; must be called within a tokio runtime
    pub fn spawn(session: SharedSession) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // the first interval tick completes immediately; skip it so the
            // first decrement lands a full second after start
            interval.tick().await;

            loop {
                interval.tick().await;
                match session.lock().tick() {
                    Tick::Ticked(_) => {}
                    Tick::Expired | Tick::Idle => break,
                }
            }
        });
        Self { handle }
    }

    /// Stop ticking immediately
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Whether the task has stopped, by expiry, self-stop, or abort
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
