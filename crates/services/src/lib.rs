#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;
pub mod timer;

pub use quiz_core::Clock;

pub use error::QuizServiceError;
pub use timer::{TICK_PERIOD, TimerHandle, TimerTick, start_ticker};

pub use sessions::{
    IntentOutcome, QuizIntent, QuizLoopService, QuizRunner, QuizSession, ResultsSnapshot,
    SessionPhase, SessionSnapshot, Submission, SubmissionReason,
};
