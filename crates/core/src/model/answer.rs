use crate::model::OptionIndex;

/// The recorded response for a single question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Answer {
    #[default]
    Unanswered,
    Chosen(OptionIndex),
}

impl Answer {
    /// Normalize a raw presentation payload.
    ///
    /// Anything that is not an integer in `1..=OPTION_COUNT` is treated as no selection.
    ///
    /// ```
    /// # use quiz_core::model::Answer;
    /// assert!(Answer::from_raw("3").is_answered());
    /// assert_eq!(Answer::from_raw(""), Answer::Unanswered);
    /// assert_eq!(Answer::from_raw("seven"), Answer::Unanswered);
    /// assert_eq!(Answer::from_raw("9"), Answer::Unanswered);
    /// ```
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        raw.trim()
            .parse::<i64>()
            .ok()
            .and_then(OptionIndex::new)
            .into()
    }

    #[must_use]
    pub fn choice(self) -> Option<OptionIndex> {
        match self {
            Answer::Unanswered => None,
            Answer::Chosen(index) => Some(index),
        }
    }

    #[must_use]
    pub fn is_answered(self) -> bool {
        matches!(self, Answer::Chosen(_))
    }
}

impl From<Option<OptionIndex>> for Answer {
    fn from(value: Option<OptionIndex>) -> Self {
        value.map_or(Answer::Unanswered, Answer::Chosen)
    }
}

impl From<OptionIndex> for Answer {
    fn from(value: OptionIndex) -> Self {
        Answer::Chosen(value)
    }
}
