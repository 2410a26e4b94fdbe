mod answer;
mod bank;
mod countdown;
mod question;
mod report;
mod settings;
mod sheet;

pub use answer::Answer;
pub use bank::{BankError, QuestionBank};
pub use countdown::{Countdown, TickOutcome};
pub use question::{OPTION_COUNT, OptionIndex, Question, QuestionError};
pub use report::{ComplimentTier, QuestionDetail, ReportSection, ScoreReport};
pub use settings::{
    DEFAULT_CRITICAL_THRESHOLD_SECS, DEFAULT_DURATION_SECS, QuizSettings, QuizSettingsDraft,
    SettingsError,
};
pub use sheet::AnswerSheet;
