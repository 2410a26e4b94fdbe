use dioxus::prelude::*;

use crate::vm::{ResultSectionVm, ResultsVm};

#[component]
pub fn ResultsPanel(results: ResultsVm, on_retake: EventHandler<()>) -> Element {
    rsx! {
        div { class: "results",
            h2 { class: "results__title", "🎉 Test Completed 🎉" }
            p { class: "results__score", "{results.score_label}" }
            p { class: "results__compliment", "{results.compliment}" }
            p { class: "results__meta",
                "{results.reason_label} · {results.submitted_at_str} · time used {results.elapsed_str}"
            }

            for section in results.sections.iter().cloned() {
                ResultSection { key: "{section.title}", section }
            }

            button {
                class: "quiz-btn quiz-btn--retake",
                id: "quiz-retake",
                r#type: "button",
                onclick: move |_| on_retake.call(()),
                "Retake Quiz"
            }
        }
    }
}

#[component]
fn ResultSection(section: ResultSectionVm) -> Element {
    rsx! {
        section { class: "{section.class}",
            h3 { "{section.title}" }
            for item in section.items.iter().cloned() {
                div { class: "{item.class}",
                    p { class: "results-item__question", "{item.heading}" }
                    p { "Your Answer: {item.your_answer}" }
                    p { "Correct Answer: {item.correct_answer}" }
                }
            }
        }
    }
}
