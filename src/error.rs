use reqwest::StatusCode;
use thiserror::Error;

/// Why a page load did not update the store.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server error status {}", .0.as_u16())]
    Status(StatusCode),

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}
