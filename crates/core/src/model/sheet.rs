use std::collections::BTreeSet;

use crate::model::{Answer, Question};

/// Per-question answers plus review flags for one attempt at a quiz.
///
/// `live_wrong` is maintained incrementally as answers are recorded and backs the
/// "currently wrong" indicator during navigation. Final scoring never reads it; see
/// [`crate::scoring::score`], which recomputes from `answers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: Vec<Answer>,
    flagged: BTreeSet<usize>,
    live_wrong: BTreeSet<usize>,
}

impl AnswerSheet {
    /// A blank sheet with `len` unanswered questions.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            answers: vec![Answer::Unanswered; len],
            flagged: BTreeSet::new(),
            live_wrong: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Answer at `index`, `Unanswered` if the index is out of range.
    #[must_use]
    pub fn answer(&self, index: usize) -> Answer {
        self.answers.get(index).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Record `answer` for `question` at `index` and update the live wrong set.
    ///
    /// Returns `false` without touching anything when `index` is out of range.
    pub fn record(&mut self, index: usize, question: &Question, answer: Answer) -> bool {
        let Some(slot) = self.answers.get_mut(index) else {
            return false;
        };
        *slot = answer;

        let is_correct = answer.choice().is_some_and(|choice| question.is_correct(choice));
        if is_correct {
            self.live_wrong.remove(&index);
        } else {
            self.live_wrong.insert(index);
        }
        true
    }

    /// Flip the review flag for `index`. Returns the new membership.
    pub fn toggle_flag(&mut self, index: usize) -> bool {
        if self.flagged.remove(&index) {
            false
        } else {
            self.flagged.insert(index);
            true
        }
    }

    #[must_use]
    pub fn is_flagged(&self, index: usize) -> bool {
        self.flagged.contains(&index)
    }

    /// Flagged indices in ascending order.
    #[must_use]
    pub fn flagged(&self) -> Vec<usize> {
        self.flagged.iter().copied().collect()
    }

    #[must_use]
    pub fn is_live_wrong(&self, index: usize) -> bool {
        self.live_wrong.contains(&index)
    }

    /// Recorded indices whose answer is not the correct one, ascending. A recorded
    /// `Unanswered` counts as wrong here.
    #[must_use]
    pub fn live_wrong(&self) -> Vec<usize> {
        self.live_wrong.iter().copied().collect()
    }

    /// Number of questions with a recorded choice.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_answered()).count()
    }

    /// Clear everything back to a blank sheet of the same length.
    pub fn clear(&mut self) {
        self.answers.fill(Answer::Unanswered);
        self.flagged.clear();
        self.live_wrong.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OptionIndex;

    fn question(correct: i64) -> Question {
        Question::new(
            "Q",
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct,
        )
        .unwrap()
    }

    fn pick(value: i64) -> Answer {
        Answer::Chosen(OptionIndex::new(value).unwrap())
    }

    #[test]
    fn live_wrong_tracks_latest_choice() {
        let q = question(2);
        let mut sheet = AnswerSheet::new(3);

        assert!(sheet.record(1, &q, pick(3)));
        assert!(sheet.is_live_wrong(1));

        assert!(sheet.record(1, &q, pick(2)));
        assert!(!sheet.is_live_wrong(1));

        sheet.record(1, &q, pick(4));
        sheet.record(1, &q, Answer::Unanswered);
        assert!(sheet.is_live_wrong(1));
        assert_eq!(sheet.answer(1), Answer::Unanswered);
    }

    #[test]
    fn recording_no_answer_marks_question_wrong() {
        let q = question(2);
        let mut sheet = AnswerSheet::new(2);

        assert!(sheet.record(0, &q, Answer::Unanswered));
        assert!(sheet.is_live_wrong(0));
        assert!(!sheet.is_live_wrong(1));

        sheet.record(0, &q, pick(2));
        assert!(!sheet.is_live_wrong(0));
        assert_eq!(sheet.live_wrong(), Vec::<usize>::new());
    }

    #[test]
    fn out_of_range_record_is_rejected() {
        let q = question(1);
        let mut sheet = AnswerSheet::new(2);
        assert!(!sheet.record(2, &q, pick(1)));
        assert_eq!(sheet.answered_count(), 0);
    }

    #[test]
    fn toggle_flag_is_an_involution() {
        let mut sheet = AnswerSheet::new(2);
        assert!(sheet.toggle_flag(0));
        assert!(sheet.is_flagged(0));
        assert!(!sheet.toggle_flag(0));
        assert!(!sheet.is_flagged(0));
    }

    #[test]
    fn clear_resets_everything() {
        let q = question(1);
        let mut sheet = AnswerSheet::new(2);
        sheet.record(0, &q, pick(2));
        sheet.toggle_flag(1);
        sheet.clear();
        assert_eq!(sheet, AnswerSheet::new(2));
    }
}
