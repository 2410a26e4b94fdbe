//! Built-in sample bank used by the `seed` binary.

use crate::repository::QuestionRecord;

#[must_use]
pub fn sample_records() -> Vec<QuestionRecord> {
    vec![
        QuestionRecord::new(
            "What is the output of print(2 ** 3)?",
            ["6", "8", "9", "5"],
            2,
        ),
        QuestionRecord::new(
            "Which keyword defines a function in Python?",
            ["func", "define", "def", "function"],
            3,
        ),
        QuestionRecord::new(
            "Which of these is an immutable sequence type?",
            ["list", "dict", "set", "tuple"],
            4,
        ),
        QuestionRecord::new(
            "What does len(\"hello\") return?",
            ["5", "4", "6", "Error"],
            1,
        ),
        QuestionRecord::new(
            "Which operator performs floor division?",
            ["/", "//", "%", "**"],
            2,
        ),
        QuestionRecord::new(
            "What is the type of the literal 3.0?",
            ["int", "float", "str", "decimal"],
            2,
        ),
        QuestionRecord::new(
            "Which statement handles exceptions?",
            ["try/except", "catch/throw", "do/rescue", "guard/else"],
            1,
        ),
        QuestionRecord::new(
            "How do you start a single-line comment?",
            ["//", "--", "#", "/*"],
            3,
        ),
        QuestionRecord::new(
            "Which method adds an item to the end of a list?",
            ["add()", "push()", "insert()", "append()"],
            4,
        ),
        QuestionRecord::new(
            "What does bool([]) evaluate to?",
            ["True", "False", "None", "Error"],
            2,
        ),
    ]
}
