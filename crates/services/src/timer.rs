//! One-second ticker feeding a quiz session.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::debug;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A tick stamped with the generation of the ticker that produced it.
///
/// Receivers compare the generation against the one they started so ticks queued by a
/// cancelled ticker are never applied to a restarted quiz.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerTick {
    pub generation: u64,
}

/// Owner of a running ticker task. Dropping the handle stops the ticker.
#[derive(Debug, Default)]
pub struct TimerHandle {
    task: Option<JoinHandle<()>>,
}

impl TimerHandle {
    /// A handle with nothing running.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop the ticker. Returns `true` if a task was still attached.
    ///
    /// Safe to call any number of times.
    pub fn cancel(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                task.abort();
                true
            }
            None => false,
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Spawn a task that sends one [`TimerTick`] every `period`, first one a full period
/// after the call.
///
/// The task ends on its own once the receiver is gone. Must be called inside a Tokio
/// runtime.
#[must_use]
pub fn start_ticker(
    period: Duration,
    generation: u64,
    sender: UnboundedSender<TimerTick>,
) -> TimerHandle {
    let task = tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if sender.send(TimerTick { generation }).is_err() {
                debug!(generation, "tick receiver closed; ticker exiting");
                break;
            }
        }
    });
    TimerHandle { task: Some(task) }
}
