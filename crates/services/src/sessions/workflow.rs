use std::sync::Arc;
use std::time::Duration;

use quiz_core::model::{QuestionBank, QuizSettings};
use storage::repository::QuestionRepository;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;

use super::runner::QuizRunner;
use super::service::QuizSession;
use crate::Clock;
use crate::error::QuizServiceError;
use crate::timer::{TICK_PERIOD, TimerTick};

/// Loads the question bank and builds sessions and runners over it.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    questions: Arc<dyn QuestionRepository>,
    settings: QuizSettings,
    tick_period: Duration,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, questions: Arc<dyn QuestionRepository>) -> Self {
        Self {
            clock,
            questions,
            settings: QuizSettings::default(),
            tick_period: TICK_PERIOD,
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: QuizSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn with_tick_period(mut self, tick_period: Duration) -> Self {
        self.tick_period = tick_period;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// Load and validate the question bank.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Storage` if the bank is missing, malformed or invalid.
    pub async fn load_bank(&self) -> Result<Arc<QuestionBank>, QuizServiceError> {
        let bank = self.questions.load_bank().await?;
        info!(questions = bank.len(), "question bank ready");
        Ok(Arc::new(bank))
    }

    /// Start a fresh session over `bank`.
    #[must_use]
    pub fn start_session(&self, bank: Arc<QuestionBank>) -> QuizSession {
        info!(
            questions = bank.len(),
            duration_secs = self.settings.duration_secs(),
            "quiz started"
        );
        QuizSession::new(bank, self.settings, self.clock)
    }

    /// Start a fresh session over `bank` with its ticker running.
    ///
    /// Must be called inside a Tokio runtime.
    #[must_use]
    pub fn start_runner(
        &self,
        bank: Arc<QuestionBank>,
    ) -> (QuizRunner, UnboundedReceiver<TimerTick>) {
        QuizRunner::start(self.start_session(bank), self.tick_period)
    }
}
