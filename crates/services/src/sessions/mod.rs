mod intent;
mod runner;
mod service;
mod view;
mod workflow;

// Public API of the quiz session subsystem.
pub use crate::error::QuizServiceError;
pub use intent::{IntentOutcome, QuizIntent, SubmissionReason};
pub use runner::QuizRunner;
pub use service::{QuizSession, SessionPhase, Submission};
pub use view::{ResultsSnapshot, SessionSnapshot};
pub use workflow::QuizLoopService;
