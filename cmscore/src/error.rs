use thiserror::Error;

/// Failures reported by, or while talking to, the content-service.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never produced a response (connection, TLS, etc.)
    #[error("transport error: {0}")]
    Transport(String),
    /// The content-service responded with a non-success status.
    #[error("content-service responded with {code}: {message}")]
    Status {
        code: u16,
        message: String,
    },
    #[error("unable to decode response: {0}")]
    Decode(String),
    #[error("unknown error")]
    Unknown,
}

#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum ValueError {
    #[error("unsupported value: {0}")]
    Unsupported(String),
}
