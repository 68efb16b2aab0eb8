//! Wire DTOs for the training API.
//!
//! These mirror the server's JSON shapes so the client module can map them
//! into domain types without leaking serde concerns upward.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use induct_core::model::{
    PhoneNumber, Question, QuestionId, Session, SessionId, Trainee, TraineeId,
};

use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub(crate) struct ScanRequest<'a> {
    pub phone: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ValidateRequest<'a> {
    #[serde(rename = "phoneNumber")]
    pub phone_number: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TraineeDto {
    pub id: u64,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl TraineeDto {
    pub(crate) fn into_trainee(self) -> Result<Trainee, ApiError> {
        let phone = PhoneNumber::new(self.phone)
            .map_err(|err| ApiError::Decode(format!("trainee phone: {err}")))?;
        Ok(Trainee::new(
            TraineeId::new(self.id),
            self.name,
            phone,
            self.email,
        ))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SessionDto {
    pub id: u64,
    pub training: String,
    pub facilitator: String,
    #[serde(rename = "scheduledAt")]
    pub scheduled_at: DateTime<Utc>,
}

impl SessionDto {
    pub(crate) fn into_session(self) -> Session {
        Session::new(
            SessionId::new(self.id),
            self.training,
            self.facilitator,
            self.scheduled_at,
        )
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuestionDto {
    pub id: u64,
    pub text: String,
    pub options: Vec<String>,
    #[serde(rename = "correctIndex")]
    pub correct_index: usize,
}

impl QuestionDto {
    pub(crate) fn into_question(self) -> Result<Question, ApiError> {
        Question::new(
            QuestionId::new(self.id),
            self.text,
            self.options,
            self.correct_index,
        )
        .map_err(|err| ApiError::Decode(format!("question {}: {err}", self.id)))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScanResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub trainee: Option<TraineeDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValidateResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub session: Option<SessionDto>,
    #[serde(default)]
    pub trainee: Option<TraineeDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuestionsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuestionDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SessionsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub sessions: Vec<SessionDto>,
}

pub(crate) fn rejection(message: Option<String>) -> ApiError {
    ApiError::Rejected(message.unwrap_or_else(|| "request rejected by server".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_request_uses_camel_case_field() {
        let body = serde_json::to_string(&ValidateRequest {
            phone_number: "0821234567",
        })
        .unwrap();
        assert_eq!(body, r#"{"phoneNumber":"0821234567"}"#);
    }

    #[test]
    fn scan_request_uses_phone_field() {
        let body = serde_json::to_string(&ScanRequest { phone: "0821234567" }).unwrap();
        assert_eq!(body, r#"{"phone":"0821234567"}"#);
    }

    #[test]
    fn questions_response_maps_to_domain() {
        let json = r#"{
            "success": true,
            "questions": [
                {"id": 1, "text": "Hard hats?", "options": ["Always", "Never"], "correctIndex": 0}
            ]
        }"#;
        let parsed: QuestionsResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.success);
        let question = parsed
            .questions
            .into_iter()
            .next()
            .unwrap()
            .into_question()
            .unwrap();
        assert_eq!(question.text(), "Hard hats?");
        assert!(question.is_correct(0));
    }

    #[test]
    fn error_envelope_keeps_server_message() {
        let json = r#"{"success": false, "message": "Phone number not registered"}"#;
        let parsed: ScanResponse = serde_json::from_str(json).unwrap();
        assert!(!parsed.success);
        let err = rejection(parsed.message);
        assert_eq!(err.to_string(), "Phone number not registered");
    }
}
