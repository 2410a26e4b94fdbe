use quiz_core::model::{QuestionDetail, ReportSection};
use services::{ResultsSnapshot, SubmissionReason};

use super::time_fmt::{format_datetime, format_elapsed};

pub const NOT_ATTEMPTED: &str = "Not Attempted";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultItemVm {
    pub heading: String,
    pub your_answer: String,
    pub correct_answer: String,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultSectionVm {
    pub section: ReportSection,
    pub title: &'static str,
    pub class: &'static str,
    pub items: Vec<ResultItemVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_label: String,
    pub compliment: &'static str,
    pub reason_label: &'static str,
    pub submitted_at_str: String,
    pub elapsed_str: String,
    /// Only non-empty sections, in Wrong, Missed, Reviewed order.
    pub sections: Vec<ResultSectionVm>,
}

#[must_use]
pub fn section_title(section: ReportSection) -> &'static str {
    match section {
        ReportSection::Wrong => "❌ Wrong Answers:",
        ReportSection::Missed => "⚠️ Missed Questions (Not Attempted):",
        ReportSection::Reviewed => "⭐ Marked for Review:",
    }
}

fn section_class(section: ReportSection) -> &'static str {
    match section {
        ReportSection::Wrong => "results-section results-section--wrong",
        ReportSection::Missed => "results-section results-section--missed",
        ReportSection::Reviewed => "results-section results-section--reviewed",
    }
}

fn map_item(detail: &QuestionDetail) -> ResultItemVm {
    ResultItemVm {
        heading: format!("Q{}: {}", detail.number, detail.question),
        your_answer: detail
            .your_answer
            .clone()
            .unwrap_or_else(|| NOT_ATTEMPTED.to_owned()),
        correct_answer: detail.correct_answer.clone(),
        class: if detail.your_answer.is_some() {
            "results-item"
        } else {
            "results-item results-item--unattempted"
        },
    }
}

#[must_use]
pub fn map_results(results: &ResultsSnapshot) -> ResultsVm {
    let sections = [
        ReportSection::Wrong,
        ReportSection::Missed,
        ReportSection::Reviewed,
    ]
    .into_iter()
    .filter_map(|section| {
        let details = results.section(section);
        (!details.is_empty()).then(|| ResultSectionVm {
            section,
            title: section_title(section),
            class: section_class(section),
            items: details.iter().map(map_item).collect(),
        })
    })
    .collect();

    ResultsVm {
        score_label: format!(
            "Your Score: {}/{}",
            results.report.correct_count(),
            results.report.total()
        ),
        compliment: results.tier.message(),
        reason_label: match results.reason {
            SubmissionReason::Confirmed => "Submitted",
            SubmissionReason::TimeExpired => "Time's up!",
        },
        submitted_at_str: format_datetime(results.submitted_at),
        elapsed_str: format_elapsed(results.elapsed_secs),
        sections,
    }
}
