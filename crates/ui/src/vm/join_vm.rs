use induct_services::{ApiError, JoinError, JoinedSession};

use crate::views::ViewError;
use crate::vm::quiz_vm::QuizVm;

/// State held by the join view once validation has succeeded: the trainee
/// context from the server and the quiz to step through.
pub struct JoinVm {
    trainee_name: String,
    session_label: Option<String>,
    pub quiz: QuizVm,
}

impl JoinVm {
    #[must_use]
    pub fn new(joined: JoinedSession) -> Self {
        Self {
            trainee_name: joined.trainee.name().to_string(),
            session_label: joined
                .session
                .as_ref()
                .map(|session| session.training().to_string()),
            quiz: QuizVm::new(joined.quiz),
        }
    }

    #[must_use]
    pub fn trainee_name(&self) -> &str {
        &self.trainee_name
    }

    #[must_use]
    pub fn session_label(&self) -> Option<&str> {
        self.session_label.as_deref()
    }
}

/// Keep error mapping at the UI boundary; the server's own message wins
/// whenever it sent one.
#[must_use]
pub fn map_join_error(err: &JoinError) -> ViewError {
    match err {
        JoinError::Phone(_) => ViewError::Message("Enter your phone number to join.".to_string()),
        JoinError::NoQuestions => {
            ViewError::Message("This session has no quiz questions yet.".to_string())
        }
        JoinError::Api(ApiError::Rejected(message)) => ViewError::Message(message.clone()),
        JoinError::Api(ApiError::NotFound) => {
            ViewError::Message("Session not found.".to_string())
        }
        JoinError::Api(_) => ViewError::Unknown,
        _ => ViewError::Unknown,
    }
}
