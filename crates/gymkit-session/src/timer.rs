//! Training clock and tick source.
//!
//! Elapsed-time display during training runs off a 1 Hz tick published
//! on the event bus. The tick task is scoped to the [`Ticker`] guard:
//! dropping the guard aborts the task, so navigating away from the
//! training screen can never leak a free-running timer.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, Instant, MissedTickBehavior};

use gymkit_core::{AppEvent, EventBus, SessionEvent};

/// Time source for the training clock.
///
/// Injected so tests can run against the tokio test clock; production
/// code uses [`SystemClock`].
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// Wall-clock time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Elapsed-time measurement for one training block.
pub struct TrainingClock {
    clock: Arc<dyn Clock>,
    started: Instant,
}

impl TrainingClock {
    /// Start measuring from now on the system clock.
    pub fn start() -> Self {
        Self::start_with(Arc::new(SystemClock))
    }

    /// Start measuring from now on the given clock.
    pub fn start_with(clock: Arc<dyn Clock>) -> Self {
        let started = clock.now();
        Self { clock, started }
    }

    /// Whole seconds elapsed since the clock started.
    pub fn elapsed_secs(&self) -> u64 {
        (self.clock.now() - self.started).as_secs()
    }

    /// Elapsed time formatted as `MM:SS`.
    pub fn display(&self) -> String {
        let secs = self.elapsed_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

impl std::fmt::Debug for TrainingClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrainingClock")
            .field("elapsed_secs", &self.elapsed_secs())
            .finish()
    }
}

/// Scoped 1 Hz tick task publishing [`SessionEvent::TimerTick`].
///
/// The task is aborted when the guard drops.
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn the tick task against the given bus.
    pub fn start(bus: Arc<EventBus>) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(1));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // interval fires immediately; discard the zeroth tick
            ticker.tick().await;
            let mut seconds: u64 = 0;
            loop {
                ticker.tick().await;
                seconds += 1;
                bus.publish(AppEvent::Session(SessionEvent::TimerTick { seconds }));
            }
        });
        Self { handle }
    }

    /// Whether the tick task is still running.
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
