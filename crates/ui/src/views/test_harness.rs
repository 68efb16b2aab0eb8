use std::sync::Arc;

use chrono::{TimeZone, Utc};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use induct_api::InMemoryApi;
use induct_core::model::{
    PhoneNumber, Question, QuestionId, Session, SessionId, Trainee, TraineeId,
};
use induct_services::{JoinService, SessionDirectoryService};

use crate::context::{UiApp, build_app_context};
use crate::views::join::JoinTestHandles;
use crate::views::{AdminView, HomeView, JoinView, ResultView};

#[derive(Clone)]
struct TestApp {
    session_id: SessionId,
    join_service: Arc<JoinService>,
    session_directory: Arc<SessionDirectoryService>,
}

impl UiApp for TestApp {
    fn default_session_id(&self) -> SessionId {
        self.session_id
    }

    fn join_service(&self) -> Arc<JoinService> {
        Arc::clone(&self.join_service)
    }

    fn session_directory(&self) -> Arc<SessionDirectoryService> {
        Arc::clone(&self.session_directory)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Admin,
    Join(u64),
    Result {
        score: Option<String>,
        status: Option<String>,
    },
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    join_handles: Option<JoinTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    if let Some(handles) = props.join_handles.clone() {
        use_context_provider(|| handles);
    }
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
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Admin => rsx! { AdminView {} },
        ViewKind::Join(session_id) => rsx! { JoinView { session_id } },
        ViewKind::Result { score, status } => rsx! { ResultView { score, status } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: Arc<InMemoryApi>,
    pub session_id: SessionId,
    pub join_handles: Option<JoinTestHandles>,
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

pub fn fixture_session(id: u64) -> Session {
    Session::new(
        SessionId::new(id),
        "Working at Heights",
        "N. Dlamini",
        Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap(),
    )
}

fn fixture_question(id: u64, correct: usize) -> Question {
    Question::new(
        QuestionId::new(id),
        format!("Question {id}?"),
        vec!["Option A".into(), "Option B".into()],
        correct,
    )
    .unwrap()
}

/// Seeded in-memory API: session 7 with one registered trainee
/// (phone 0821234567) and three questions all answered by option A.
pub fn seeded_api(session_id: SessionId) -> Arc<InMemoryApi> {
    let api = Arc::new(InMemoryApi::new());
    api.add_session(fixture_session(session_id.value()));
    api.register_trainee(
        session_id,
        Trainee::new(
            TraineeId::new(1),
            "Thandi Nkosi",
            PhoneNumber::new("0821234567").unwrap(),
            None,
        ),
    );
    api.set_questions(
        session_id,
        vec![
            fixture_question(1, 0),
            fixture_question(2, 0),
            fixture_question(3, 0),
        ],
    );
    api
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let session_id = SessionId::new(7);
    let api = seeded_api(session_id);
    let training_api: Arc<dyn induct_api::TrainingApi> = api.clone();
    build_harness(view, session_id, api, training_api)
}

pub fn setup_view_harness_with_training_api(
    view: ViewKind,
    session_id: SessionId,
    training_api: Arc<dyn induct_api::TrainingApi>,
) -> ViewHarness {
    build_harness(view, session_id, Arc::new(InMemoryApi::new()), training_api)
}

fn build_harness(
    view: ViewKind,
    session_id: SessionId,
    api: Arc<InMemoryApi>,
    training_api: Arc<dyn induct_api::TrainingApi>,
) -> ViewHarness {
    let join_service = Arc::new(JoinService::new(Arc::clone(&training_api)));
    let session_directory = Arc::new(SessionDirectoryService::new(training_api));

    let join_handles = match view {
        ViewKind::Join(_) => Some(JoinTestHandles::default()),
        _ => None,
    };

    let app = Arc::new(TestApp {
        session_id,
        join_service,
        session_directory,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            join_handles: join_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        api,
        session_id,
        join_handles,
    }
}
