use crate::model::{Answer, AnswerSheet, QuestionBank, QuestionDetail, ScoreReport};

/// Score a finished sheet against its bank.
///
/// Pure and deterministic. Wrong answers are recomputed from the recorded answers and
/// do not consult the sheet's live wrong set. Sheet entries past the end of the bank are
/// ignored; bank questions without a sheet entry count as missed.
///
/// ```
/// # use quiz_core::model::{Answer, AnswerSheet, OptionIndex, Question, QuestionBank};
/// # use quiz_core::scoring::score;
/// let q = |correct| {
///     Question::new("Q", vec!["a".into(), "b".into(), "c".into(), "d".into()], correct).unwrap()
/// };
/// let bank = QuestionBank::new(vec![q(1), q(2), q(3)]).unwrap();
/// let mut sheet = AnswerSheet::new(bank.len());
/// sheet.record(0, &bank.questions()[0], Answer::Chosen(OptionIndex::new(1).unwrap()));
/// sheet.record(1, &bank.questions()[1], Answer::Chosen(OptionIndex::new(3).unwrap()));
///
/// let report = score(&bank, &sheet);
/// assert_eq!(report.correct_count(), 1);
/// assert_eq!(report.wrong(), &[1]);
/// assert_eq!(report.missed(), &[2]);
/// ```
#[must_use]
pub fn score(bank: &QuestionBank, sheet: &AnswerSheet) -> ScoreReport {
    let mut correct_count = 0_usize;
    let mut wrong = Vec::new();
    let mut missed = Vec::new();

    for (index, question) in bank.iter().enumerate() {
        match sheet.answer(index) {
            Answer::Unanswered => missed.push(index),
            Answer::Chosen(choice) if question.is_correct(choice) => {
                correct_count = correct_count.saturating_add(1);
            }
            Answer::Chosen(_) => wrong.push(index),
        }
    }

    let reviewed = sheet
        .flagged()
        .into_iter()
        .filter(|index| *index < bank.len())
        .collect();

    ScoreReport::new(correct_count, bank.len(), wrong, missed, reviewed)
}

/// Display details for the question at `index`, or `None` if it is not in the bank.
#[must_use]
pub fn question_detail(
    bank: &QuestionBank,
    sheet: &AnswerSheet,
    index: usize,
) -> Option<QuestionDetail> {
    let question = bank.get(index)?;
    let your_answer = sheet
        .answer(index)
        .choice()
        .map(|choice| question.option_text(choice).to_owned());

    Some(QuestionDetail {
        index,
        number: index + 1,
        question: question.text().to_owned(),
        your_answer,
        correct_answer: question.correct_text().to_owned(),
    })
}

/// Details for every index in `indices`, skipping any outside the bank.
#[must_use]
pub fn question_details(
    bank: &QuestionBank,
    sheet: &AnswerSheet,
    indices: &[usize],
) -> Vec<QuestionDetail> {
    indices
        .iter()
        .filter_map(|index| question_detail(bank, sheet, *index))
        .collect()
}
