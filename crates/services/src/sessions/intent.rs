use quiz_core::model::Answer;

/// Everything the presentation layer can ask a quiz session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizIntent {
    Select { index: usize, answer: Answer },
    /// Unparsed selection payload straight from the presentation layer.
    SelectRaw { index: usize, raw: String },
    Next,
    Previous,
    ToggleReview,
    Finish,
    ConfirmSubmit,
    DeclineSubmit,
    Tick,
    TimerExpired,
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubmissionReason {
    Confirmed,
    TimeExpired,
}

/// What happened when an intent was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentOutcome {
    Applied,
    /// The intent does not apply in the current state; nothing changed.
    Ignored,
    /// The session now waits for the user to confirm or decline submission.
    ConfirmationRequired,
    Submitted(SubmissionReason),
}

impl IntentOutcome {
    #[must_use]
    pub fn is_submitted(self) -> bool {
        matches!(self, Self::Submitted(_))
    }
}
