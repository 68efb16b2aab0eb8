use std::sync::Arc;

use induct_api::{JoinGrant, TrainingApi};
use induct_core::model::{PhoneNumber, Session, SessionId, Trainee};

use crate::error::JoinError;
use crate::quiz_service::QuizService;

/// Which validation endpoint a join goes through.
///
/// The kiosk scanner posts to `/scan`, the regular join page to `/validate`;
/// both match the trainee by phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinEntry {
    Scan,
    Validate,
}

/// Validated trainee context plus a quiz ready to start.
#[derive(Debug)]
pub struct JoinedSession {
    pub session: Option<Session>,
    pub trainee: Trainee,
    pub quiz: QuizService,
}

/// The join-and-validate flow.
///
/// Validation must succeed before questions are fetched; a submission makes
/// exactly one validation request, and an empty phone number never reaches
/// the network.
pub struct JoinService {
    api: Arc<dyn TrainingApi>,
}

impl JoinService {
    #[must_use]
    pub fn new(api: Arc<dyn TrainingApi>) -> Self {
        Self { api }
    }

    /// Validate `raw_phone` against the session and fetch its question set.
    ///
    /// # Errors
    ///
    /// Returns `JoinError::Phone` for empty input (before any network call),
    /// `JoinError::Api` for validation or transport failures, and
    /// `JoinError::NoQuestions` when the session has an empty question set.
    pub async fn join(
        &self,
        session_id: SessionId,
        raw_phone: &str,
        entry: JoinEntry,
    ) -> Result<JoinedSession, JoinError> {
        let phone = PhoneNumber::new(raw_phone)?;

        let (session, trainee) = match entry {
            JoinEntry::Scan => {
                let trainee = self.api.scan_session(session_id, &phone).await?;
                (None, trainee)
            }
            JoinEntry::Validate => {
                let JoinGrant { session, trainee } =
                    self.api.validate_session(session_id, &phone).await?;
                (session, trainee)
            }
        };

        // Only reached once validation has succeeded.
        let questions = self.api.session_questions(session_id).await?;
        if questions.is_empty() {
            return Err(JoinError::NoQuestions);
        }

        Ok(JoinedSession {
            session,
            trainee,
            quiz: QuizService::new(session_id, questions),
        })
    }
}
