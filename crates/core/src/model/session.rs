use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{PhoneNumber, SessionId, TraineeId};

/// A scheduled training/induction event trainees join.
///
/// Sessions are owned by the server; the client only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    training: String,
    facilitator: String,
    scheduled_at: DateTime<Utc>,
}

impl Session {
    #[must_use]
    pub fn new(
        id: SessionId,
        training: impl Into<String>,
        facilitator: impl Into<String>,
        scheduled_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            training: training.into(),
            facilitator: facilitator.into(),
            scheduled_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn training(&self) -> &str {
        &self.training
    }

    #[must_use]
    pub fn facilitator(&self) -> &str {
        &self.facilitator
    }

    #[must_use]
    pub fn scheduled_at(&self) -> DateTime<Utc> {
        self.scheduled_at
    }
}

/// An individual registered to attend a session, identified by phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainee {
    id: TraineeId,
    name: String,
    phone: PhoneNumber,
    email: Option<String>,
}

impl Trainee {
    #[must_use]
    pub fn new(
        id: TraineeId,
        name: impl Into<String>,
        phone: PhoneNumber,
        email: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            phone,
            email,
        }
    }

    #[must_use]
    pub fn id(&self) -> TraineeId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
