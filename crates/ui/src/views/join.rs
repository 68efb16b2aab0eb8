use dioxus::prelude::*;
use dioxus_router::use_navigator;

use induct_core::model::SessionId;
use induct_services::JoinEntry;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{JoinVm, QuizStep, map_join_error};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum JoinIntent {
    Submit(String),
    Dismiss,
    Answer(usize),
}

/// Regular join page: trainees validate by phone number.
#[component]
pub fn JoinView(session_id: u64) -> Element {
    rsx! { JoinFlow { session_id, entry: JoinEntry::Validate } }
}

/// Kiosk entry point backed by the `/scan` endpoint.
#[component]
pub fn ScanView(session_id: u64) -> Element {
    rsx! { JoinFlow { session_id, entry: JoinEntry::Scan } }
}

#[component]
fn JoinFlow(session_id: u64, entry: JoinEntry) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let session_id = SessionId::new(session_id);
    let join_service = ctx.join_service();

    let mut phone = use_signal(String::new);
    let error = use_signal(|| None::<ViewError>);
    let vm = use_signal(|| None::<JoinVm>);
    let submitting = use_signal(|| false);

    let dispatch_intent = {
        let join_service = join_service.clone();
        use_callback(move |intent: JoinIntent| {
            let mut error = error;
            let mut vm = vm;
            let mut submitting = submitting;

            match intent {
                JoinIntent::Dismiss => error.set(None),
                JoinIntent::Submit(raw) => {
                    // One outstanding request per action.
                    if submitting() {
                        return;
                    }
                    let join_service = join_service.clone();
                    spawn(async move {
                        submitting.set(true);
                        match join_service.join(session_id, &raw, entry).await {
                            Ok(joined) => {
                                error.set(None);
                                vm.set(Some(JoinVm::new(joined)));
                            }
                            Err(err) => error.set(Some(map_join_error(&err))),
                        }
                        submitting.set(false);
                    });
                }
                JoinIntent::Answer(selected) => {
                    let step = {
                        let mut guard = vm.write();
                        guard.as_mut().map(|join| join.quiz.answer(selected))
                    };
                    match step {
                        Some(Ok(QuizStep::Continue)) => {}
                        Some(Ok(QuizStep::Completed(result))) => {
                            let _ = navigator.push(Route::Result {
                                score: Some(result.score.to_string()),
                                status: Some(result.outcome.as_status_str().to_string()),
                            });
                        }
                        Some(Err(err)) => error.set(Some(err)),
                        None => error.set(Some(ViewError::Unknown)),
                    }
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<JoinTestHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    let vm_guard = vm.read();
    let joined = vm_guard.as_ref();

    rsx! {
        div { class: "page join-page",
            h2 { "Join Session" }

            if let Some(err) = error.read().clone() {
                div { class: "notice notice--error",
                    p { class: "notice__message", "{err.message()}" }
                    button {
                        class: "notice__dismiss",
                        id: "join-dismiss",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(JoinIntent::Dismiss),
                        "Dismiss"
                    }
                }
            }

            if let Some(join) = joined {
                p { class: "join-welcome", "Welcome, {join.trainee_name()}" }
                if let Some(label) = join.session_label() {
                    p { class: "join-session", "{label}" }
                }
                if let Some(question) = join.quiz.question_text() {
                    p { class: "quiz-progress", "{join.quiz.progress_label()}" }
                    div { class: "quiz-question",
                        p { "{question}" }
                    }
                    div { class: "quiz-options",
                        for (index, option) in join.quiz.options().iter().enumerate() {
                            button {
                                class: "quiz-option",
                                key: "{index}",
                                r#type: "button",
                                onclick: move |_| dispatch_intent.call(JoinIntent::Answer(index)),
                                "{option}"
                            }
                        }
                    }
                } else {
                    p { "Quiz complete." }
                }
            } else {
                form { class: "join-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        dispatch_intent.call(JoinIntent::Submit(phone()));
                    },
                    label { r#for: "join-phone", "Phone number" }
                    input {
                        id: "join-phone",
                        value: "{phone}",
                        placeholder: "e.g. 082 123 4567",
                        oninput: move |evt| phone.set(evt.value()),
                    }
                    button {
                        id: "join-submit",
                        r#type: "submit",
                        disabled: submitting(),
                        "Join"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct JoinTestHandles {
    dispatch: Rc<RefCell<Option<Callback<JoinIntent>>>>,
}

#[cfg(test)]
impl JoinTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<JoinIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<JoinIntent> {
        (*self.dispatch.borrow()).expect("join dispatch registered")
    }
}
