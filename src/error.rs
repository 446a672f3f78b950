use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the positions API client.
///
/// Transport problems, unexpected statuses, and undecodable bodies are kept
/// as distinct variants so callers can render each differently instead of
/// pattern-matching on message strings.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced an HTTP response: DNS failure, connection
    /// refused, timeout.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status the operation does not accept.
    /// Carries the raw body text for display.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    /// The server answered with a success status but the body did not decode
    /// into the expected shape (missing `id`/`name`, not an array, not JSON).
    #[error("malformed {context} response: {source}")]
    MalformedResponse {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ApiError>;
