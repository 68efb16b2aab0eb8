use std::sync::Arc;

use induct_api::TrainingApi;
use induct_core::model::Session;

use crate::error::DirectoryError;

/// Read-only directory of scheduled sessions for the staff areas.
pub struct SessionDirectoryService {
    api: Arc<dyn TrainingApi>,
}

impl SessionDirectoryService {
    #[must_use]
    pub fn new(api: Arc<dyn TrainingApi>) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Propagates `ApiError` from the directory request.
    pub async fn list_sessions(&self) -> Result<Vec<Session>, DirectoryError> {
        Ok(self.api.list_sessions().await?)
    }
}
