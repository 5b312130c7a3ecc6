use std::error::Error as StdError;

use crate::domain::ValidationError;

#[derive(Debug, thiserror::Error)]
/// Errors produced inside [`CeculaClient`](crate::CeculaClient).
///
/// Operations never return this type: [`CeculaError::Transport`] and
/// [`CeculaError::HttpStatus`] (and the unlikely [`CeculaError::Encode`]) are folded into an
/// [`ApiResponse::Failure`](crate::ApiResponse::Failure) by the request helpers. The remaining
/// variants come from client construction.
pub enum CeculaError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Request body could not be encoded as JSON.
    #[error("encode error: {0}")]
    Encode(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured base URL is not usable as a prefix for endpoint paths.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CeculaError {
    /// Code reported in the failure envelope: the HTTP status when the server answered,
    /// `0` otherwise.
    pub fn code(&self) -> u16 {
        match self {
            Self::HttpStatus { status, .. } => *status,
            _ => 0,
        }
    }

    /// Message reported in the failure envelope.
    pub fn message(&self) -> String {
        match self {
            Self::HttpStatus { status, body } => {
                crate::transport::http_failure_message(*status, body.as_deref())
            }
            Self::Transport(err) | Self::Encode(err) => error_chain(&**err),
            other => other.to_string(),
        }
    }
}

/// Join an error and its sources with `": "`.
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = inner.source();
    }
    message
}
