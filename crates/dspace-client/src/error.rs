//! Transport error type shared by the repository and wiki clients

use thiserror::Error;

/// Failure to reach an endpoint or to read what it sent back.
///
/// Never retried: a lookup that fails here aborts the operation that issued it.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request failed: {message}")]
    Request { message: String },
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },
    #[error("Timeout")]
    Timeout,
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Decode error: {message}")]
    Decode { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout
        } else if e.is_decode() {
            TransportError::Decode {
                message: e.to_string(),
            }
        } else {
            TransportError::Request {
                message: e.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(e: serde_json::Error) -> Self {
        TransportError::Decode {
            message: e.to_string(),
        }
    }
}
