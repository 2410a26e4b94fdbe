use std::sync::Arc;

use quiz_core::model::{Answer, OptionIndex, QuestionBank};
use services::{
    IntentOutcome, QuizIntent, QuizLoopService, QuizRunner, SessionSnapshot, TimerTick,
};
use tokio::sync::mpsc::UnboundedReceiver;

use super::results_vm::{ResultsVm, map_results};
use super::time_fmt::format_time_left;

pub const REVIEW_MARK: &str = " ⭐ (Marked for Review)";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub value: u8,
    pub label: String,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub heading: String,
    pub options: Vec<OptionVm>,
    pub can_go_back: bool,
    pub is_last: bool,
    pub timer_label: String,
    pub timer_class: &'static str,
    pub next_class: &'static str,
    pub finish_class: &'static str,
    pub progress_label: String,
    pub awaiting_confirmation: bool,
}

/// What the quiz page shows right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Question(QuestionVm),
    Results(ResultsVm),
}

#[must_use]
pub fn map_question(snapshot: &SessionSnapshot) -> QuestionVm {
    let review_mark = if snapshot.is_flagged { REVIEW_MARK } else { "" };
    let options = snapshot
        .options
        .iter()
        .enumerate()
        .filter_map(|(position, label)| {
            let index = OptionIndex::from_position(position)?;
            Some(OptionVm {
                value: index.value(),
                label: label.clone(),
                checked: snapshot.selected == Some(index),
            })
        })
        .collect();

    QuestionVm {
        heading: format!("Q{}: {}{review_mark}", snapshot.number, snapshot.question),
        options,
        can_go_back: snapshot.can_go_back,
        is_last: snapshot.is_last,
        timer_label: format_time_left(snapshot.remaining_secs),
        timer_class: if snapshot.is_critical {
            "quiz-timer quiz-timer--critical"
        } else {
            "quiz-timer"
        },
        next_class: if snapshot.is_urgent {
            "quiz-btn"
        } else {
            "quiz-btn quiz-btn--go"
        },
        finish_class: if snapshot.is_urgent {
            "quiz-btn quiz-btn--urgent"
        } else {
            "quiz-btn"
        },
        progress_label: format!("{} / {}", snapshot.number, snapshot.total),
        awaiting_confirmation: snapshot.awaiting_confirmation,
    }
}

/// Presentation wrapper around a running quiz.
#[derive(Debug)]
pub struct QuizVm {
    runner: QuizRunner,
}

impl QuizVm {
    #[must_use]
    pub fn new(runner: QuizRunner) -> Self {
        Self { runner }
    }

    #[must_use]
    pub fn screen(&self) -> Option<QuizScreen> {
        let session = self.runner.session();
        if let Some(results) = session.results() {
            return Some(QuizScreen::Results(map_results(&results)));
        }
        session
            .snapshot()
            .map(|snapshot| QuizScreen::Question(map_question(&snapshot)))
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.runner.session().current_index()
    }

    pub fn dispatch(&mut self, intent: QuizIntent) -> IntentOutcome {
        self.runner.apply(intent)
    }

    /// Record the option picked on the current question.
    pub fn select(&mut self, value: u8) -> IntentOutcome {
        let index = self.current_index();
        let answer = Answer::from(OptionIndex::new(i64::from(value)));
        self.dispatch(QuizIntent::Select { index, answer })
    }

    pub fn on_tick(&mut self, tick: TimerTick) -> IntentOutcome {
        self.runner.on_tick(tick)
    }
}

/// Start a quiz over `bank` with its ticker running.
#[must_use]
pub fn start_quiz(
    quiz_loop: &QuizLoopService,
    bank: Arc<QuestionBank>,
) -> (QuizVm, UnboundedReceiver<TimerTick>) {
    let (runner, ticks) = quiz_loop.start_runner(bank);
    (QuizVm::new(runner), ticks)
}
