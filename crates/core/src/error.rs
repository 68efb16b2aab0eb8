use thiserror::Error;

use crate::model::phone::PhoneNumberError;
use crate::model::question::QuestionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Phone(#[from] PhoneNumberError),
    #[error(transparent)]
    Question(#[from] QuestionError),
}
