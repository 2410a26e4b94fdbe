use std::fmt;

use thiserror::Error;

/// Number of options every multiple-choice question carries.
pub const OPTION_COUNT: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text is empty")]
    EmptyText,

    #[error("expected {expected} options, found {found}")]
    OptionCount { expected: usize, found: usize },

    #[error("correct answer {value} is out of range 1..={max}")]
    CorrectAnswerOutOfRange { value: i64, max: usize },
}

//
// ─── OPTION INDEX ──────────────────────────────────────────────────────────────
//

/// 1-based position of an option within a question.
///
/// ```
/// # use quiz_core::model::OptionIndex;
/// let second = OptionIndex::new(2).unwrap();
/// assert_eq!(second.value(), 2);
/// assert_eq!(second.position(), 1);
/// assert!(OptionIndex::new(0).is_none());
/// assert!(OptionIndex::new(5).is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionIndex(u8);

impl OptionIndex {
    /// Returns `None` unless `value` is in `1..=OPTION_COUNT`.
    #[must_use]
    pub fn new(value: i64) -> Option<Self> {
        let max = i64::try_from(OPTION_COUNT).unwrap_or(i64::MAX);
        if (1..=max).contains(&value) {
            u8::try_from(value).ok().map(Self)
        } else {
            None
        }
    }

    /// Builds an index from a zero-based option position.
    #[must_use]
    pub fn from_position(position: usize) -> Option<Self> {
        i64::try_from(position)
            .ok()
            .and_then(|p| Self::new(p.saturating_add(1)))
    }

    /// Returns the 1-based value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the zero-based position into an options slice.
    #[must_use]
    pub fn position(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// All valid indices in display order.
    pub fn all() -> impl Iterator<Item = OptionIndex> {
        (0..OPTION_COUNT).filter_map(Self::from_position)
    }
}

impl fmt::Debug for OptionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionIndex({})", self.0)
    }
}

impl fmt::Display for OptionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_answer: OptionIndex,
}

impl Question {
    /// Validate and build a question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` if the text is blank,
    /// `QuestionError::OptionCount` unless exactly [`OPTION_COUNT`] options are given,
    /// and `QuestionError::CorrectAnswerOutOfRange` if `correct_answer` is not a valid
    /// 1-based option index.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer: i64,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.len() != OPTION_COUNT {
            return Err(QuestionError::OptionCount {
                expected: OPTION_COUNT,
                found: options.len(),
            });
        }
        let correct_answer =
            OptionIndex::new(correct_answer).ok_or(QuestionError::CorrectAnswerOutOfRange {
                value: correct_answer,
                max: OPTION_COUNT,
            })?;

        Ok(Self {
            text,
            options,
            correct_answer,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> OptionIndex {
        self.correct_answer
    }

    /// Text of the option at `index`.
    #[must_use]
    pub fn option_text(&self, index: OptionIndex) -> &str {
        self.options
            .get(index.position())
            .map_or("", String::as_str)
    }

    /// Text of the correct option.
    #[must_use]
    pub fn correct_text(&self) -> &str {
        self.option_text(self.correct_answer)
    }

    #[must_use]
    pub fn is_correct(&self, choice: OptionIndex) -> bool {
        choice == self.correct_answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        ["a", "b", "c", "d"].into_iter().map(String::from).collect()
    }

    #[test]
    fn builds_valid_question() {
        let q = Question::new("Pick b", options(), 2).unwrap();
        assert_eq!(q.text(), "Pick b");
        assert_eq!(q.correct_answer().value(), 2);
        assert_eq!(q.correct_text(), "b");
        assert!(q.is_correct(OptionIndex::new(2).unwrap()));
        assert!(!q.is_correct(OptionIndex::new(1).unwrap()));
    }

    #[test]
    fn rejects_blank_text() {
        let err = Question::new("   ", options(), 1).unwrap_err();
        assert_eq!(err, QuestionError::EmptyText);
    }

    #[test]
    fn rejects_wrong_option_count() {
        let err = Question::new("Q", vec!["only".into()], 1).unwrap_err();
        assert_eq!(
            err,
            QuestionError::OptionCount {
                expected: 4,
                found: 1
            }
        );
    }

    #[test]
    fn rejects_out_of_range_correct_answer() {
        for bad in [0, 5, -1] {
            let err = Question::new("Q", options(), bad).unwrap_err();
            assert_eq!(
                err,
                QuestionError::CorrectAnswerOutOfRange { value: bad, max: 4 }
            );
        }
    }

    #[test]
    fn option_index_iterates_in_order() {
        let values: Vec<u8> = OptionIndex::all().map(OptionIndex::value).collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
        assert_eq!(OptionIndex::from_position(4), None);
    }
}
