use thiserror::Error;

/// Errors surfaced by the training API client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The server answered but rejected the request; carries the server's
    /// own message so the UI can show it verbatim.
    #[error("{0}")]
    Rejected(String),

    #[error("session not found")]
    NotFound,

    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Decode(String),
}
