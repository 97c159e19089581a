use thiserror::Error;

/// Failure modes of the remote fetch. All of them are terminal for the
/// triggering action; nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request exceeded [`crate::REQUEST_TIMEOUT`].
    #[error("request timed out")]
    Timeout,
    /// Transport failure, non-success status, or undecodable payload.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl ApiError {
    /// Fold reqwest's timeout case into its own variant so callers can tell
    /// a slow endpoint from an unreachable one.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Request(err)
        }
    }
}
