//! Shared error types for the services crate.

use thiserror::Error;

use induct_api::ApiError;
use induct_core::model::PhoneNumberError;

/// Errors emitted by `JoinService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JoinError {
    #[error(transparent)]
    Phone(#[from] PhoneNumberError),
    #[error("session has no questions")]
    NoQuestions,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz already completed")]
    Completed,
    #[error("option index {index} out of range")]
    InvalidOption { index: usize },
}

/// Errors emitted by `SessionDirectoryService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DirectoryError {
    #[error(transparent)]
    Api(#[from] ApiError),
}
