use dioxus::prelude::*;
use services::QuizIntent;

use crate::context::AppContext;
use crate::views::ResultsPanel;
use crate::vm::{OptionVm, QuestionVm, QuizScreen, QuizVm, start_quiz};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(|| None::<QuizVm>);

    // Owns the tick receiver for the lifetime of the page. Dropping the page drops the
    // runner, which stops its ticker.
    use_future(move || {
        let quiz_loop = ctx.quiz_loop();
        let bank = ctx.bank();
        async move {
            let mut vm = vm;
            let (started, mut ticks) = start_quiz(&quiz_loop, bank);
            vm.set(Some(started));
            while let Some(tick) = ticks.recv().await {
                if let Some(vm) = vm.write().as_mut() {
                    vm.on_tick(tick);
                }
            }
        }
    });

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        if let Some(vm) = vm.write().as_mut() {
            vm.dispatch(intent);
        }
    });
    let select = use_callback(move |value: u8| {
        let mut vm = vm;
        if let Some(vm) = vm.write().as_mut() {
            vm.select(value);
        }
    });

    let screen = vm.read().as_ref().and_then(QuizVm::screen);

    rsx! {
        div { class: "page quiz-page", id: "quiz-root",
            match screen {
                None => rsx! {
                    p { "Loading..." }
                },
                Some(QuizScreen::Question(question)) => rsx! {
                    QuestionCard { question, on_intent: dispatch, on_select: select }
                },
                Some(QuizScreen::Results(results)) => rsx! {
                    ResultsPanel {
                        results,
                        on_retake: move |()| dispatch.call(QuizIntent::Reset),
                    }
                },
            }
        }
    }
}

#[component]
fn QuestionCard(
    question: QuestionVm,
    on_intent: EventHandler<QuizIntent>,
    on_select: EventHandler<u8>,
) -> Element {
    let confirming = question.awaiting_confirmation;

    rsx! {
        div { class: "quiz-card",
            p { class: "quiz-progress", "{question.progress_label}" }
            h2 { class: "quiz-question", "{question.heading}" }

            div { class: "quiz-options", role: "radiogroup",
                for option in question.options.iter().cloned() {
                    OptionRow { key: "{option.value}", option, disabled: confirming, on_select }
                }
            }

            div { class: "quiz-actions",
                button {
                    class: "quiz-btn",
                    id: "quiz-previous",
                    r#type: "button",
                    disabled: !question.can_go_back || confirming,
                    onclick: move |_| on_intent.call(QuizIntent::Previous),
                    "Previous"
                }
                button {
                    class: "quiz-btn quiz-btn--review",
                    id: "quiz-review",
                    r#type: "button",
                    disabled: confirming,
                    onclick: move |_| on_intent.call(QuizIntent::ToggleReview),
                    "Review Later"
                }
                button {
                    class: "{question.next_class}",
                    id: "quiz-next",
                    r#type: "button",
                    disabled: confirming,
                    onclick: move |_| on_intent.call(QuizIntent::Next),
                    "Next"
                }
                button {
                    class: "{question.finish_class}",
                    id: "quiz-finish",
                    r#type: "button",
                    disabled: confirming,
                    onclick: move |_| on_intent.call(QuizIntent::Finish),
                    "Finish Test"
                }
            }

            p { class: "{question.timer_class}", id: "quiz-timer", "{question.timer_label}" }
        }

        if confirming {
            ConfirmDialog { on_intent }
        }
    }
}

#[component]
fn OptionRow(option: OptionVm, disabled: bool, on_select: EventHandler<u8>) -> Element {
    let value = option.value;
    rsx! {
        label { class: "quiz-option",
            input {
                r#type: "radio",
                name: "quiz-option",
                value: "{value}",
                checked: option.checked,
                disabled,
                onchange: move |_| on_select.call(value),
            }
            span { "{option.label}" }
        }
    }
}

#[component]
fn ConfirmDialog(on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-overlay",
            div {
                class: "quiz-modal",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "quiz-confirm-title",
                h2 { id: "quiz-confirm-title", "Submit Quiz" }
                p { "Are you sure you want to submit the quiz?" }
                div { class: "quiz-modal__actions",
                    button {
                        class: "quiz-btn quiz-btn--urgent",
                        id: "quiz-confirm-yes",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::ConfirmSubmit),
                        "Yes"
                    }
                    button {
                        class: "quiz-btn",
                        id: "quiz-confirm-no",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::DeclineSubmit),
                        "No"
                    }
                }
            }
        }
    }
}
