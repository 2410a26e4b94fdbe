/// Coarse rating of a score, derived from the fraction of correct answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComplimentTier {
    Perfect,
    Great,
    Improving,
    TryAgain,
}

impl ComplimentTier {
    /// Classify `correct` out of `total` using fixed breakpoints at 100%, 70% and 40%.
    ///
    /// ```
    /// # use quiz_core::model::ComplimentTier;
    /// assert_eq!(ComplimentTier::classify(10, 10), ComplimentTier::Perfect);
    /// assert_eq!(ComplimentTier::classify(7, 10), ComplimentTier::Great);
    /// assert_eq!(ComplimentTier::classify(4, 10), ComplimentTier::Improving);
    /// assert_eq!(ComplimentTier::classify(3, 10), ComplimentTier::TryAgain);
    /// ```
    #[must_use]
    pub fn classify(correct: usize, total: usize) -> Self {
        let correct = correct as u128;
        let total = total as u128;
        if correct == total {
            Self::Perfect
        } else if correct * 10 >= total * 7 {
            Self::Great
        } else if correct * 10 >= total * 4 {
            Self::Improving
        } else {
            Self::TryAgain
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Perfect => "🌟 Excellent! You nailed it! 🌟",
            Self::Great => "💪 Great job! You're almost there!",
            Self::Improving => "🙂 Keep practicing, you're improving!",
            Self::TryAgain => "😅 Better luck next time!",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReportSection {
    Wrong,
    Missed,
    Reviewed,
}

/// Final score for a submitted quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    correct_count: usize,
    total: usize,
    wrong: Vec<usize>,
    missed: Vec<usize>,
    reviewed: Vec<usize>,
}

impl ScoreReport {
    #[must_use]
    pub fn new(
        correct_count: usize,
        total: usize,
        wrong: Vec<usize>,
        missed: Vec<usize>,
        reviewed: Vec<usize>,
    ) -> Self {
        Self {
            correct_count,
            total,
            wrong,
            missed,
            reviewed,
        }
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn wrong(&self) -> &[usize] {
        &self.wrong
    }

    #[must_use]
    pub fn missed(&self) -> &[usize] {
        &self.missed
    }

    #[must_use]
    pub fn reviewed(&self) -> &[usize] {
        &self.reviewed
    }

    #[must_use]
    pub fn section(&self, section: ReportSection) -> &[usize] {
        match section {
            ReportSection::Wrong => &self.wrong,
            ReportSection::Missed => &self.missed,
            ReportSection::Reviewed => &self.reviewed,
        }
    }

    #[must_use]
    pub fn tier(&self) -> ComplimentTier {
        ComplimentTier::classify(self.correct_count, self.total)
    }
}

/// One question as shown in a results section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDetail {
    pub index: usize,
    /// 1-based question number.
    pub number: usize,
    pub question: String,
    /// `None` when the question was not attempted.
    pub your_answer: Option<String>,
    pub correct_answer: String,
}
