use std::sync::Arc;

use induct_core::model::SessionId;
use induct_services::{JoinService, SessionDirectoryService};

pub trait UiApp: Send + Sync {
    fn default_session_id(&self) -> SessionId;

    fn join_service(&self) -> Arc<JoinService>;
    fn session_directory(&self) -> Arc<SessionDirectoryService>;
}

#[derive(Clone)]
pub struct AppContext {
    default_session_id: SessionId,

    join_service: Arc<JoinService>,
    session_directory: Arc<SessionDirectoryService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            default_session_id: app.default_session_id(),
            join_service: app.join_service(),
            session_directory: app.session_directory(),
        }
    }

    #[must_use]
    pub fn default_session_id(&self) -> SessionId {
        self.default_session_id
    }

    #[must_use]
    pub fn join_service(&self) -> Arc<JoinService> {
        Arc::clone(&self.join_service)
    }

    #[must_use]
    pub fn session_directory(&self) -> Arc<SessionDirectoryService> {
        Arc::clone(&self.session_directory)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
