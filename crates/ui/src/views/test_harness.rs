use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::QuestionBank;
use quiz_core::time::fixed_clock;
use services::QuizLoopService;
use storage::repository::{QuestionRecord, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;

#[derive(Clone)]
struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
    bank: Arc<QuestionBank>,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Build a quiz page over `records` with a fixed clock.
pub async fn setup_quiz_harness(records: Vec<QuestionRecord>) -> ViewHarness {
    let storage = Storage::in_memory(records);
    let quiz_loop = QuizLoopService::new(fixed_clock(), Arc::clone(&storage.questions));
    let bank = quiz_loop.load_bank().await.expect("load bank");

    let app = Arc::new(TestApp {
        quiz_loop: Arc::new(quiz_loop),
        bank,
    });

    ViewHarness {
        dom: VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app }),
    }
}
