#![forbid(unsafe_code)]

pub mod directory_service;
pub mod error;
pub mod join_service;
pub mod quiz_service;

pub use induct_api::ApiError;

pub use directory_service::SessionDirectoryService;
pub use error::{DirectoryError, JoinError, QuizError};
pub use join_service::{JoinEntry, JoinService, JoinedSession};
pub use quiz_service::{QuizAnswer, QuizResult, QuizService};
