use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use induct_core::model::{PhoneNumber, Question, Session, SessionId, Trainee};

use crate::client::{JoinGrant, TrainingApi};
use crate::error::ApiError;

/// Per-endpoint request counts, for asserting call ordering in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub scan: u32,
    pub validate: u32,
    pub questions: u32,
    pub sessions: u32,
}

#[derive(Default)]
struct SessionFixture {
    session: Option<Session>,
    trainees: Vec<Trainee>,
    questions: Vec<Question>,
}

/// In-memory `TrainingApi` double.
///
/// Holds registered trainees and question sets per session and counts every
/// call, so flow tests can assert that no request fires before it should.
#[derive(Default)]
pub struct InMemoryApi {
    fixtures: Mutex<HashMap<SessionId, SessionFixture>>,
    scan_calls: AtomicU32,
    validate_calls: AtomicU32,
    question_calls: AtomicU32,
    session_list_calls: AtomicU32,
}

impl InMemoryApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_session(&self, session: Session) {
        let id = session.id();
        let mut fixtures = self.fixtures.lock().expect("fixtures lock");
        fixtures.entry(id).or_default().session = Some(session);
    }

    pub fn register_trainee(&self, session_id: SessionId, trainee: Trainee) {
        let mut fixtures = self.fixtures.lock().expect("fixtures lock");
        fixtures.entry(session_id).or_default().trainees.push(trainee);
    }

    pub fn set_questions(&self, session_id: SessionId, questions: Vec<Question>) {
        let mut fixtures = self.fixtures.lock().expect("fixtures lock");
        fixtures.entry(session_id).or_default().questions = questions;
    }

    #[must_use]
    pub fn counts(&self) -> CallCounts {
        CallCounts {
            scan: self.scan_calls.load(Ordering::SeqCst),
            validate: self.validate_calls.load(Ordering::SeqCst),
            questions: self.question_calls.load(Ordering::SeqCst),
            sessions: self.session_list_calls.load(Ordering::SeqCst),
        }
    }

    fn match_trainee(
        &self,
        session_id: SessionId,
        phone: &PhoneNumber,
    ) -> Result<(Option<Session>, Trainee), ApiError> {
        let fixtures = self.fixtures.lock().expect("fixtures lock");
        let fixture = fixtures.get(&session_id).ok_or(ApiError::NotFound)?;
        let trainee = fixture
            .trainees
            .iter()
            .find(|trainee| trainee.phone() == phone)
            .cloned()
            .ok_or_else(|| {
                ApiError::Rejected("Phone number not registered for this session".to_string())
            })?;
        Ok((fixture.session.clone(), trainee))
    }
}

#[async_trait]
impl TrainingApi for InMemoryApi {
    async fn scan_session(
        &self,
        session_id: SessionId,
        phone: &PhoneNumber,
    ) -> Result<Trainee, ApiError> {
        self.scan_calls.fetch_add(1, Ordering::SeqCst);
        let (_, trainee) = self.match_trainee(session_id, phone)?;
        Ok(trainee)
    }

    async fn validate_session(
        &self,
        session_id: SessionId,
        phone: &PhoneNumber,
    ) -> Result<JoinGrant, ApiError> {
        self.validate_calls.fetch_add(1, Ordering::SeqCst);
        let (session, trainee) = self.match_trainee(session_id, phone)?;
        Ok(JoinGrant { session, trainee })
    }

    async fn session_questions(&self, session_id: SessionId) -> Result<Vec<Question>, ApiError> {
        self.question_calls.fetch_add(1, Ordering::SeqCst);
        let fixtures = self.fixtures.lock().expect("fixtures lock");
        let fixture = fixtures.get(&session_id).ok_or(ApiError::NotFound)?;
        Ok(fixture.questions.clone())
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, ApiError> {
        self.session_list_calls.fetch_add(1, Ordering::SeqCst);
        let fixtures = self.fixtures.lock().expect("fixtures lock");
        let mut sessions: Vec<Session> = fixtures
            .values()
            .filter_map(|fixture| fixture.session.clone())
            .collect();
        sessions.sort_by_key(Session::id);
        Ok(sessions)
    }
}
