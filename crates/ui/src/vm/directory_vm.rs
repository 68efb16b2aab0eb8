use induct_core::model::Session;

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionRowVm {
    pub id: u64,
    pub training: String,
    pub facilitator: String,
    pub scheduled_at_str: String,
}

impl From<&Session> for SessionRowVm {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id().value(),
            training: session.training().to_string(),
            facilitator: session.facilitator().to_string(),
            scheduled_at_str: format_datetime(session.scheduled_at()),
        }
    }
}

#[must_use]
pub fn map_session_rows(sessions: &[Session]) -> Vec<SessionRowVm> {
    sessions.iter().map(SessionRowVm::from).collect()
}
