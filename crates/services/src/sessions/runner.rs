use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use super::intent::{IntentOutcome, QuizIntent};
use super::service::QuizSession;
use crate::timer::{TimerHandle, TimerTick, start_ticker};

/// A quiz session coupled to its countdown ticker.
///
/// The runner keeps the ticker in step with the session phase: it runs while the quiz is
/// unsubmitted, stops on submission and restarts on `Reset`. Ticks come back through
/// [`QuizRunner::on_tick`], so every state change goes through the same `apply` path.
#[derive(Debug)]
pub struct QuizRunner {
    session: QuizSession,
    timer: TimerHandle,
    generation: u64,
    period: Duration,
    sender: UnboundedSender<TimerTick>,
}

impl QuizRunner {
    /// Wrap `session` and start its ticker. Must be called inside a Tokio runtime.
    ///
    /// The returned receiver yields the ticks to feed back into [`QuizRunner::on_tick`].
    #[must_use]
    pub fn start(session: QuizSession, period: Duration) -> (Self, UnboundedReceiver<TimerTick>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut runner = Self {
            session,
            timer: TimerHandle::idle(),
            generation: 0,
            period,
            sender,
        };
        runner.sync_timer();
        (runner, receiver)
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply an intent and bring the ticker in line with the resulting phase.
    pub fn apply(&mut self, intent: QuizIntent) -> IntentOutcome {
        let reset = matches!(intent, QuizIntent::Reset);
        if reset {
            self.timer.cancel();
            self.generation = self.generation.wrapping_add(1);
        }
        let outcome = self.session.apply(intent);
        self.sync_timer();
        outcome
    }

    /// Feed a tick from the ticker. Ticks from a ticker replaced by `Reset` are dropped.
    pub fn on_tick(&mut self, tick: TimerTick) -> IntentOutcome {
        if tick.generation != self.generation {
            debug!(
                stale = tick.generation,
                current = self.generation,
                "dropping stale tick"
            );
            return IntentOutcome::Ignored;
        }
        self.apply(QuizIntent::Tick)
    }

    /// Stop the ticker. Returns `false` if it was already stopped.
    pub fn stop_timer(&mut self) -> bool {
        let stopped = self.timer.cancel();
        if stopped {
            debug!(generation = self.generation, "ticker stopped");
        }
        stopped
    }

    fn sync_timer(&mut self) {
        if self.session.is_submitted() {
            self.stop_timer();
        } else if !self.timer.is_running() {
            self.timer = start_ticker(self.period, self.generation, self.sender.clone());
            debug!(generation = self.generation, "ticker started");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use quiz_core::model::{Question, QuestionBank, QuizSettingsDraft};
    use quiz_core::time::fixed_clock;

    use super::*;
    use crate::sessions::SubmissionReason;
    use crate::timer::TICK_PERIOD;

    fn session(duration: u32) -> QuizSession {
        let questions = (1..=2)
            .map(|i| {
                Question::new(
                    format!("Q{i}"),
                    vec!["a".into(), "b".into(), "c".into(), "d".into()],
                    1,
                )
                .unwrap()
            })
            .collect();
        let settings = QuizSettingsDraft {
            duration_secs: Some(duration),
            critical_threshold_secs: Some(1),
        }
        .validate()
        .unwrap();
        QuizSession::new(
            Arc::new(QuestionBank::new(questions).unwrap()),
            settings,
            fixed_clock(),
        )
    }

    fn drain(runner: &mut QuizRunner, ticks: &mut UnboundedReceiver<TimerTick>) {
        while let Ok(tick) = ticks.try_recv() {
            runner.on_tick(tick);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_count_down_and_expire() {
        let (mut runner, mut ticks) = QuizRunner::start(session(3), TICK_PERIOD);
        assert!(runner.is_timer_running());

        tokio::time::sleep(Duration::from_millis(1_500)).await;
        drain(&mut runner, &mut ticks);
        assert_eq!(runner.session().remaining_secs(), 2);

        tokio::time::sleep(Duration::from_secs(2)).await;
        drain(&mut runner, &mut ticks);
        assert!(runner.session().is_submitted());
        assert_eq!(
            runner.session().submission().unwrap().reason,
            SubmissionReason::TimeExpired
        );
        assert!(!runner.is_timer_running());
        assert!(!runner.stop_timer());
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_keep_running_during_confirmation() {
        let (mut runner, mut ticks) = QuizRunner::start(session(5), TICK_PERIOD);
        runner.apply(QuizIntent::Finish);
        assert!(runner.is_timer_running());

        tokio::time::sleep(Duration::from_millis(2_500)).await;
        drain(&mut runner, &mut ticks);
        assert_eq!(runner.session().remaining_secs(), 3);
        assert!(runner.session().is_awaiting_confirmation());
    }

    #[tokio::test(start_paused = true)]
    async fn confirmed_submission_stops_timer_once() {
        let (mut runner, _ticks) = QuizRunner::start(session(30), TICK_PERIOD);
        runner.apply(QuizIntent::Finish);
        let outcome = runner.apply(QuizIntent::ConfirmSubmit);
        assert_eq!(outcome, IntentOutcome::Submitted(SubmissionReason::Confirmed));
        assert!(!runner.is_timer_running());
        assert!(!runner.stop_timer());
        assert!(!runner.stop_timer());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_restarts_timer_and_drops_stale_ticks() {
        let (mut runner, mut ticks) = QuizRunner::start(session(30), TICK_PERIOD);
        tokio::time::sleep(Duration::from_millis(1_500)).await;
        let stale = ticks.try_recv().unwrap();

        runner.apply(QuizIntent::Reset);
        assert_eq!(runner.generation(), 1);
        assert!(runner.is_timer_running());
        assert_eq!(runner.on_tick(stale), IntentOutcome::Ignored);
        assert_eq!(runner.session().remaining_secs(), 30);

        tokio::time::sleep(Duration::from_millis(1_200)).await;
        drain(&mut runner, &mut ticks);
        assert_eq!(runner.session().remaining_secs(), 29);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_after_submission_starts_a_new_ticker() {
        let (mut runner, _ticks) = QuizRunner::start(session(30), TICK_PERIOD);
        runner.apply(QuizIntent::TimerExpired);
        assert!(!runner.is_timer_running());

        runner.apply(QuizIntent::Reset);
        assert!(runner.is_timer_running());
        assert!(!runner.session().is_submitted());
    }
}
