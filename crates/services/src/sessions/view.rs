use chrono::{DateTime, Utc};
use quiz_core::model::{ComplimentTier, OptionIndex, QuestionDetail, ReportSection, ScoreReport};
use quiz_core::scoring;

use super::intent::SubmissionReason;
use super::service::QuizSession;

/// Everything the quiz screen needs to render the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// 1-based question number.
    pub number: usize,
    pub total: usize,
    pub question: String,
    pub options: Vec<String>,
    pub selected: Option<OptionIndex>,
    pub can_go_back: bool,
    pub is_flagged: bool,
    pub is_live_wrong: bool,
    pub is_last: bool,
    pub remaining_secs: u32,
    pub is_critical: bool,
    /// At or below the critical threshold.
    pub is_urgent: bool,
    pub awaiting_confirmation: bool,
}

/// Frozen results of a submitted quiz, with display details for each section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsSnapshot {
    pub report: ScoreReport,
    pub tier: ComplimentTier,
    pub reason: SubmissionReason,
    pub submitted_at: DateTime<Utc>,
    pub elapsed_secs: u32,
    pub wrong: Vec<QuestionDetail>,
    pub missed: Vec<QuestionDetail>,
    pub reviewed: Vec<QuestionDetail>,
}

impl ResultsSnapshot {
    #[must_use]
    pub fn section(&self, section: ReportSection) -> &[QuestionDetail] {
        match section {
            ReportSection::Wrong => &self.wrong,
            ReportSection::Missed => &self.missed,
            ReportSection::Reviewed => &self.reviewed,
        }
    }
}

impl QuizSession {
    /// Snapshot of the current question, or `None` once submitted.
    #[must_use]
    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        if self.is_submitted() {
            return None;
        }
        let index = self.current_index();
        let question = self.current_question()?;
        Some(SessionSnapshot {
            number: index + 1,
            total: self.total_questions(),
            question: question.text().to_owned(),
            options: question.options().to_vec(),
            selected: self.selected(),
            can_go_back: self.can_go_back(),
            is_flagged: self.is_flagged(index),
            is_live_wrong: self.sheet().is_live_wrong(index),
            is_last: self.is_last(),
            remaining_secs: self.remaining_secs(),
            is_critical: self.is_critical(),
            is_urgent: self.is_urgent(),
            awaiting_confirmation: self.is_awaiting_confirmation(),
        })
    }

    /// Results of the submitted quiz, or `None` while it is still running.
    #[must_use]
    pub fn results(&self) -> Option<ResultsSnapshot> {
        let submission = self.submission()?;
        let report = &submission.report;
        let details = |section| {
            scoring::question_details(self.bank(), self.sheet(), report.section(section))
        };

        Some(ResultsSnapshot {
            report: report.clone(),
            tier: report.tier(),
            reason: submission.reason,
            submitted_at: submission.submitted_at,
            elapsed_secs: submission.elapsed_secs,
            wrong: details(ReportSection::Wrong),
            missed: details(ReportSection::Missed),
            reviewed: details(ReportSection::Reviewed),
        })
    }
}
