use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Failure taxonomy for portal client calls.
///
/// `MissingSession` and `Validation` are raised locally, before any network
/// I/O. `Api` carries the backend's own message when its error body has one.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no active session")]
    MissingSession,

    #[error("{0}")]
    Validation(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("session storage: {0}")]
    Storage(#[from] std::io::Error),
}

impl ClientError {
    /// True for 401/403 replies, which invalidate the stored session.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ClientError::Api { status, .. } if *status == 401 || *status == 403)
    }
}
