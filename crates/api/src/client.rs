use std::env;

use async_trait::async_trait;
use reqwest::Client;

use induct_core::model::{PhoneNumber, Question, Session, SessionId, Trainee};

use crate::error::ApiError;
use crate::wire::{
    QuestionDto, QuestionsResponse, ScanRequest, ScanResponse, SessionDto, SessionsResponse,
    ValidateRequest, ValidateResponse, rejection,
};

/// Trainee/session context returned by a successful validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinGrant {
    pub session: Option<Session>,
    pub trainee: Trainee,
}

/// Client contract for the remote training API.
///
/// The HTTP implementation lives in `HttpApi`; tests use `InMemoryApi`.
#[async_trait]
pub trait TrainingApi: Send + Sync {
    /// `POST /sessions/{id}/scan` with `{ "phone": … }`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` with the server's message when the phone
    /// does not match a registered trainee.
    async fn scan_session(
        &self,
        session_id: SessionId,
        phone: &PhoneNumber,
    ) -> Result<Trainee, ApiError>;

    /// `POST /sessions/{id}/validate` with `{ "phoneNumber": … }`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` with the server's message on a failed
    /// validation.
    async fn validate_session(
        &self,
        session_id: SessionId,
        phone: &PhoneNumber,
    ) -> Result<JoinGrant, ApiError>;

    /// `GET /sessions/{id}/questions`. Only called after a successful
    /// validation; the ordering is enforced by the join service.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport or server failures.
    async fn session_questions(&self, session_id: SessionId) -> Result<Vec<Question>, ApiError>;

    /// `GET /sessions` — the scheduled-session directory for staff areas.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport or server failures.
    async fn list_sessions(&self) -> Result<Vec<Session>, ApiError>;
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Read the API base URL from `INDUCT_API_URL`.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_base_url(env::var("INDUCT_API_URL").ok())
    }

    fn from_base_url(base_url: Option<String>) -> Option<Self> {
        let base_url = base_url?;
        if base_url.trim().is_empty() {
            return None;
        }
        Some(Self { base_url })
    }

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// `TrainingApi` over HTTP via reqwest.
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn check_status(response: &reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        // 4xx carries a JSON error envelope the caller decodes; anything else
        // non-success is a transport-level failure.
        if !status.is_success() && !status.is_client_error() {
            return Err(ApiError::HttpStatus(status));
        }
        Ok(())
    }
}

#[async_trait]
impl TrainingApi for HttpApi {
    async fn scan_session(
        &self,
        session_id: SessionId,
        phone: &PhoneNumber,
    ) -> Result<Trainee, ApiError> {
        let url = self.config.endpoint(&format!("sessions/{session_id}/scan"));
        let response = self
            .client
            .post(url)
            .json(&ScanRequest {
                phone: phone.as_str(),
            })
            .send()
            .await?;
        Self::check_status(&response)?;

        let body: ScanResponse = response.json().await?;
        if !body.success {
            return Err(rejection(body.message));
        }
        body.trainee
            .ok_or_else(|| ApiError::Decode("scan response missing trainee".to_string()))?
            .into_trainee()
    }

    async fn validate_session(
        &self,
        session_id: SessionId,
        phone: &PhoneNumber,
    ) -> Result<JoinGrant, ApiError> {
        let url = self
            .config
            .endpoint(&format!("sessions/{session_id}/validate"));
        let response = self
            .client
            .post(url)
            .json(&ValidateRequest {
                phone_number: phone.as_str(),
            })
            .send()
            .await?;
        Self::check_status(&response)?;

        let body: ValidateResponse = response.json().await?;
        if !body.success {
            return Err(rejection(body.message));
        }
        let trainee = body
            .trainee
            .ok_or_else(|| ApiError::Decode("validate response missing trainee".to_string()))?
            .into_trainee()?;
        Ok(JoinGrant {
            session: body.session.map(SessionDto::into_session),
            trainee,
        })
    }

    async fn session_questions(&self, session_id: SessionId) -> Result<Vec<Question>, ApiError> {
        let url = self
            .config
            .endpoint(&format!("sessions/{session_id}/questions"));
        let response = self.client.get(url).send().await?;
        Self::check_status(&response)?;

        let body: QuestionsResponse = response.json().await?;
        if !body.success {
            return Err(rejection(body.message));
        }
        body.questions
            .into_iter()
            .map(QuestionDto::into_question)
            .collect()
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, ApiError> {
        let url = self.config.endpoint("sessions");
        let response = self.client.get(url).send().await?;
        Self::check_status(&response)?;

        let body: SessionsResponse = response.json().await?;
        if !body.success {
            return Err(rejection(body.message));
        }
        Ok(body
            .sessions
            .into_iter()
            .map(SessionDto::into_session)
            .collect())
    }
}
