use dioxus::prelude::*;
use quiz_core::model::{ComplimentTier, QuestionDetail, ReportSection, ScoreReport};
use quiz_core::time::fixed_now;
use services::{ResultsSnapshot, SubmissionReason};
use storage::repository::QuestionRecord;

use super::ResultsPanel;
use super::test_harness::setup_quiz_harness;
use crate::vm::{ResultsVm, map_results};

#[derive(Props, Clone, PartialEq)]
struct ResultsHarnessProps {
    results: ResultsVm,
}

#[component]
fn ResultsHarness(props: ResultsHarnessProps) -> Element {
    rsx! {
        ResultsPanel { results: props.results.clone(), on_retake: |()| {} }
    }
}

fn detail(index: usize, your_answer: Option<&str>) -> QuestionDetail {
    QuestionDetail {
        index,
        number: index + 1,
        question: format!("What is {index}?"),
        your_answer: your_answer.map(str::to_owned),
        correct_answer: format!("answer {index}"),
    }
}

#[test]
fn results_panel_smoke_renders_sections() {
    let snapshot = ResultsSnapshot {
        report: ScoreReport::new(1, 3, vec![1], vec![2], vec![1]),
        tier: ComplimentTier::TryAgain,
        reason: SubmissionReason::Confirmed,
        submitted_at: fixed_now(),
        elapsed_secs: 12,
        wrong: vec![detail(1, Some("guess"))],
        missed: vec![detail(2, None)],
        reviewed: vec![detail(1, Some("guess"))],
    };
    assert_eq!(snapshot.section(ReportSection::Reviewed).len(), 1);

    let mut dom = VirtualDom::new_with_props(
        ResultsHarness,
        ResultsHarnessProps {
            results: map_results(&snapshot),
        },
    );
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    for expected in [
        "Test Completed",
        "Your Score: 1/3",
        "Better luck next time!",
        "Wrong Answers:",
        "Missed Questions (Not Attempted):",
        "Marked for Review:",
        "Q2: What is 1?",
        "Your Answer: guess",
        "Your Answer: Not Attempted",
        "Correct Answer: answer 2",
        "Retake Quiz",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let records = vec![
        QuestionRecord::new(
            "Which keyword defines a function?",
            ["def", "fn", "func", "lambda"],
            1,
        ),
        QuestionRecord::new("Which type is immutable?", ["list", "dict", "tuple", "set"], 3),
    ];
    let mut harness = setup_quiz_harness(records).await;
    harness.rebuild();
    for _ in 0..5 {
        let html = harness.render();
        if html.contains("Q1:") {
            break;
        }
        harness.drive_async().await;
    }

    let html = harness.render();
    assert!(
        html.contains("Q1: Which keyword defines a function?"),
        "missing question in {html}"
    );
    assert!(html.contains("Time Left : 60 sec"), "missing timer in {html}");
    assert!(html.contains("Previous"), "missing previous in {html}");
    assert!(html.contains("Finish Test"), "missing finish in {html}");
    assert!(!html.contains("Submit Quiz"), "unexpected dialog in {html}");
}
