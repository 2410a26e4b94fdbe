use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use quiz_core::Clock;
use quiz_core::model::{
    Answer, AnswerSheet, Countdown, OptionIndex, Question, QuestionBank, QuizSettings,
    ScoreReport, TickOutcome,
};
use quiz_core::scoring;
use tracing::{debug, info, warn};

use super::intent::{IntentOutcome, QuizIntent, SubmissionReason};

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Active,
    /// The user asked to submit and the presentation must confirm or decline.
    AwaitingConfirmation,
    Submitted,
}

/// Frozen result of a submitted session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub reason: SubmissionReason,
    pub submitted_at: DateTime<Utc>,
    pub elapsed_secs: u32,
    pub report: ScoreReport,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One attempt at a timed quiz.
///
/// All mutation goes through the intent methods below (or [`QuizSession::apply`]).
/// Intents issued in a state where they do not apply return [`IntentOutcome::Ignored`]
/// and leave the session untouched.
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    settings: QuizSettings,
    clock: Clock,
    current: usize,
    sheet: AnswerSheet,
    countdown: Countdown,
    phase: SessionPhase,
    started_at: DateTime<Utc>,
    submission: Option<Submission>,
}

impl QuizSession {
    /// Start a fresh session positioned on the first question.
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>, settings: QuizSettings, clock: Clock) -> Self {
        let sheet = AnswerSheet::new(bank.len());
        let started_at = clock.now();
        Self {
            bank,
            settings,
            clock,
            current: 0,
            sheet,
            countdown: Countdown::new(&settings),
            phase: SessionPhase::Active,
            started_at,
            submission: None,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.phase == SessionPhase::Submitted
    }

    #[must_use]
    pub fn is_awaiting_confirmation(&self) -> bool {
        self.phase == SessionPhase::AwaitingConfirmation
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.bank.get(self.current)
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.bank.len()
    }

    /// Previous is only available past the first question of an unsubmitted session.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.phase == SessionPhase::Active && self.current > 0
    }

    #[must_use]
    pub fn answer(&self, index: usize) -> Answer {
        self.sheet.answer(index)
    }

    /// Choice recorded for the current question.
    #[must_use]
    pub fn selected(&self) -> Option<OptionIndex> {
        self.sheet.answer(self.current).choice()
    }

    #[must_use]
    pub fn sheet(&self) -> &AnswerSheet {
        &self.sheet
    }

    #[must_use]
    pub fn is_flagged(&self, index: usize) -> bool {
        self.sheet.is_flagged(index)
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining_secs()
    }

    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.countdown.is_critical()
    }

    /// At or below the critical threshold; one second earlier than `is_critical`.
    #[must_use]
    pub fn is_urgent(&self) -> bool {
        self.countdown.is_urgent()
    }

    #[must_use]
    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    #[must_use]
    pub fn report(&self) -> Option<&ScoreReport> {
        self.submission.as_ref().map(|s| &s.report)
    }

    /// Dispatch an intent to the matching operation.
    pub fn apply(&mut self, intent: QuizIntent) -> IntentOutcome {
        match intent {
            QuizIntent::Select { index, answer } => self.select_option(index, answer),
            QuizIntent::SelectRaw { index, raw } => self.select_raw(index, &raw),
            QuizIntent::Next => self.advance(),
            QuizIntent::Previous => self.retreat(),
            QuizIntent::ToggleReview => self.toggle_review(),
            QuizIntent::Finish => self.finish(),
            QuizIntent::ConfirmSubmit => self.confirm_submission(),
            QuizIntent::DeclineSubmit => self.decline_submission(),
            QuizIntent::Tick => self.tick(),
            QuizIntent::TimerExpired => self.expire(),
            QuizIntent::Reset => self.reset(),
        }
    }

    /// Record `answer` for the question at `index`.
    pub fn select_option(&mut self, index: usize, answer: Answer) -> IntentOutcome {
        if self.phase != SessionPhase::Active {
            return IntentOutcome::Ignored;
        }
        let Some(question) = self.bank.get(index) else {
            warn!(index, total = self.bank.len(), "selection for unknown question");
            return IntentOutcome::Ignored;
        };
        self.sheet.record(index, question, answer);
        debug!(index, ?answer, "recorded answer");
        IntentOutcome::Applied
    }

    /// Record a raw presentation payload; anything unparsable counts as no selection.
    pub fn select_raw(&mut self, index: usize, raw: &str) -> IntentOutcome {
        self.select_option(index, Answer::from_raw(raw))
    }

    /// Move to the next question, or ask for submission on the last one.
    pub fn advance(&mut self) -> IntentOutcome {
        if self.phase != SessionPhase::Active {
            return IntentOutcome::Ignored;
        }
        self.commit_current();

        if self.current + 1 < self.bank.len() {
            self.current += 1;
            debug!(index = self.current, "advanced");
            IntentOutcome::Applied
        } else {
            self.request_confirmation()
        }
    }

    pub fn retreat(&mut self) -> IntentOutcome {
        if !self.can_go_back() {
            return IntentOutcome::Ignored;
        }
        self.current -= 1;
        debug!(index = self.current, "retreated");
        IntentOutcome::Applied
    }

    /// Flip the review flag on the current question.
    pub fn toggle_review(&mut self) -> IntentOutcome {
        if self.phase != SessionPhase::Active {
            return IntentOutcome::Ignored;
        }
        self.commit_current();
        let flagged = self.sheet.toggle_flag(self.current);
        debug!(index = self.current, flagged, "toggled review flag");
        IntentOutcome::Applied
    }

    /// Ask for submission from any question.
    pub fn finish(&mut self) -> IntentOutcome {
        if self.phase != SessionPhase::Active {
            return IntentOutcome::Ignored;
        }
        self.commit_current();
        self.request_confirmation()
    }

    pub fn confirm_submission(&mut self) -> IntentOutcome {
        if self.phase != SessionPhase::AwaitingConfirmation {
            return IntentOutcome::Ignored;
        }
        self.submit(SubmissionReason::Confirmed)
    }

    /// Back out of the confirmation prompt, staying on the same question.
    pub fn decline_submission(&mut self) -> IntentOutcome {
        if self.phase != SessionPhase::AwaitingConfirmation {
            return IntentOutcome::Ignored;
        }
        self.phase = SessionPhase::Active;
        debug!(index = self.current, "submission declined");
        IntentOutcome::Applied
    }

    /// Consume one second of the countdown, submitting when it runs out.
    pub fn tick(&mut self) -> IntentOutcome {
        if self.is_submitted() {
            return IntentOutcome::Ignored;
        }
        match self.countdown.tick() {
            TickOutcome::Running { .. } => IntentOutcome::Applied,
            TickOutcome::Expired => self.expire(),
        }
    }

    /// Forced submission when time is up. Bypasses confirmation.
    pub fn expire(&mut self) -> IntentOutcome {
        if self.is_submitted() {
            return IntentOutcome::Ignored;
        }
        self.submit(SubmissionReason::TimeExpired)
    }

    /// Discard all progress and start over on the same bank.
    pub fn reset(&mut self) -> IntentOutcome {
        self.current = 0;
        self.sheet.clear();
        self.countdown.reset();
        self.phase = SessionPhase::Active;
        self.started_at = self.clock.now();
        self.submission = None;
        info!(questions = self.bank.len(), "quiz reset");
        IntentOutcome::Applied
    }

    // Re-applies the stored choice so the live wrong set matches it before the session
    // leaves the current question.
    fn commit_current(&mut self) {
        let answer = self.sheet.answer(self.current);
        if let Some(question) = self.bank.get(self.current) {
            self.sheet.record(self.current, question, answer);
        }
    }

    fn request_confirmation(&mut self) -> IntentOutcome {
        self.phase = SessionPhase::AwaitingConfirmation;
        debug!(index = self.current, "submission requested");
        IntentOutcome::ConfirmationRequired
    }

    fn submit(&mut self, reason: SubmissionReason) -> IntentOutcome {
        self.commit_current();
        let report = scoring::score(&self.bank, &self.sheet);
        info!(
            ?reason,
            correct = report.correct_count(),
            total = report.total(),
            wrong = report.wrong().len(),
            missed = report.missed().len(),
            "quiz submitted"
        );
        self.submission = Some(Submission {
            reason,
            submitted_at: self.clock.now(),
            elapsed_secs: self.countdown.elapsed_secs(),
            report,
        });
        self.phase = SessionPhase::Submitted;
        IntentOutcome::Submitted(reason)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions", &self.bank.len())
            .field("current", &self.current)
            .field("phase", &self.phase)
            .field("remaining_secs", &self.countdown.remaining_secs())
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
