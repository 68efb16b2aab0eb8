use std::sync::Arc;

use induct_api::{ApiError, TrainingApi};
use induct_core::model::{PhoneNumber, Question, Session, SessionId, Trainee};

use super::join::JoinIntent;
use super::test_harness::{
    ViewKind, setup_view_harness, setup_view_harness_with_training_api,
};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_role_areas() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Admin dashboard"), "missing admin link in {html}");
    assert!(html.contains("HSE dashboard"), "missing hse link in {html}");
    // SSR escapes the apostrophe in the link text, so match on the href.
    assert!(
        html.contains("/sessions/7/join"),
        "missing join link in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn staff_view_smoke_lists_scheduled_sessions() {
    let mut harness = setup_view_harness(ViewKind::Admin);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Working at Heights"), "missing training in {html}");
    assert!(html.contains("N. Dlamini"), "missing facilitator in {html}");
    assert!(html.contains("2026-03-02 08:00"), "missing date in {html}");
}

struct FailingApi;

#[async_trait::async_trait]
impl TrainingApi for FailingApi {
    async fn scan_session(
        &self,
        _session_id: SessionId,
        _phone: &PhoneNumber,
    ) -> Result<Trainee, ApiError> {
        Err(ApiError::Decode("fail".to_string()))
    }

    async fn validate_session(
        &self,
        _session_id: SessionId,
        _phone: &PhoneNumber,
    ) -> Result<induct_api::JoinGrant, ApiError> {
        Err(ApiError::Decode("fail".to_string()))
    }

    async fn session_questions(
        &self,
        _session_id: SessionId,
    ) -> Result<Vec<Question>, ApiError> {
        Err(ApiError::Decode("fail".to_string()))
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, ApiError> {
        Err(ApiError::Decode("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn staff_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness_with_training_api(
        ViewKind::Admin,
        SessionId::new(7),
        Arc::new(FailingApi),
    );
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Something went wrong"),
        "missing error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn join_view_smoke_renders_phone_form() {
    let mut harness = setup_view_harness(ViewKind::Join(7));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Phone number"), "missing label in {html}");
    assert!(html.contains("join-phone"), "missing input in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn empty_phone_shows_inline_error_without_network() {
    let mut harness = setup_view_harness(ViewKind::Join(7));
    harness.rebuild();
    let handles = harness.join_handles.clone().expect("join handles");

    handles.dispatch().call(JoinIntent::Submit(String::new()));
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Enter your phone number to join."),
        "missing inline error in {html}"
    );
    let counts = harness.api.counts();
    assert_eq!(counts.validate, 0);
    assert_eq!(counts.scan, 0);
    assert_eq!(counts.questions, 0);
}

#[tokio::test(flavor = "current_thread")]
async fn valid_phone_validates_once_then_shows_quiz() {
    let mut harness = setup_view_harness(ViewKind::Join(7));
    harness.rebuild();
    let handles = harness.join_handles.clone().expect("join handles");

    handles
        .dispatch()
        .call(JoinIntent::Submit("0821234567".to_string()));
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Welcome, Thandi Nkosi"),
        "missing welcome in {html}"
    );
    assert!(
        html.contains("Question 1 of 3"),
        "missing progress in {html}"
    );
    assert!(html.contains("Question 1?"), "missing question in {html}");

    let counts = harness.api.counts();
    assert_eq!(counts.validate, 1);
    assert_eq!(counts.questions, 1);
    assert_eq!(counts.scan, 0);
}

#[tokio::test(flavor = "current_thread")]
async fn server_rejection_is_shown_and_dismissable() {
    let mut harness = setup_view_harness(ViewKind::Join(7));
    harness.rebuild();
    let handles = harness.join_handles.clone().expect("join handles");

    handles
        .dispatch()
        .call(JoinIntent::Submit("0000000000".to_string()));
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Phone number not registered for this session"),
        "missing server message in {html}"
    );
    // Still on the form; the failure is not fatal to the page.
    assert!(html.contains("join-phone"), "form gone in {html}");
    let counts = harness.api.counts();
    assert_eq!(counts.validate, 1);
    assert_eq!(counts.questions, 0);

    handles.dispatch().call(JoinIntent::Dismiss);
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        !html.contains("Phone number not registered for this session"),
        "error not dismissed in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn answering_advances_quiz_progress() {
    let mut harness = setup_view_harness(ViewKind::Join(7));
    harness.rebuild();
    let handles = harness.join_handles.clone().expect("join handles");

    handles
        .dispatch()
        .call(JoinIntent::Submit("0821234567".to_string()));
    harness.drive_async().await;
    harness.drive_async().await;

    handles.dispatch().call(JoinIntent::Answer(0));
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Question 2 of 3"),
        "progress did not advance in {html}"
    );

    handles.dispatch().call(JoinIntent::Answer(0));
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Question 3 of 3"),
        "progress did not advance in {html}"
    );

    // One validation and one fetch for the whole flow.
    let counts = harness.api.counts();
    assert_eq!(counts.validate, 1);
    assert_eq!(counts.questions, 1);
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_smoke_renders_passed_green() {
    let mut harness = setup_view_harness(ViewKind::Result {
        score: Some("95".to_string()),
        status: Some("Passed".to_string()),
    });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("PASSED"), "missing PASSED in {html}");
    assert!(html.contains("band-green"), "missing green band in {html}");
    assert!(html.contains("Score: 95%"), "missing score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_smoke_renders_failed_red() {
    let mut harness = setup_view_harness(ViewKind::Result {
        score: Some("40".to_string()),
        status: Some("failed".to_string()),
    });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("FAILED"), "missing FAILED in {html}");
    assert!(html.contains("band-red"), "missing red band in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_smoke_mid_score_is_yellow() {
    let mut harness = setup_view_harness(ViewKind::Result {
        score: Some("70".to_string()),
        status: Some("passed".to_string()),
    });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("band-yellow"), "missing yellow band in {html}");
    assert!(html.contains("PASSED"), "missing PASSED in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_smoke_defaults_missing_query() {
    let mut harness = setup_view_harness(ViewKind::Result {
        score: None,
        status: None,
    });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Score: 0%"), "missing default score in {html}");
    assert!(html.contains("FAILED"), "missing FAILED in {html}");
    assert!(html.contains("band-red"), "missing red band in {html}");
}
