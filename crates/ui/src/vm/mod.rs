mod quiz_vm;
mod results_vm;
mod time_fmt;

pub use quiz_vm::{
    OptionVm, QuestionVm, QuizScreen, QuizVm, REVIEW_MARK, map_question, start_quiz,
};
pub use results_vm::{
    NOT_ATTEMPTED, ResultItemVm, ResultSectionVm, ResultsVm, map_results, section_title,
};
pub use time_fmt::{format_datetime, format_elapsed, format_time_left};
