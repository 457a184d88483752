//! Live backend client error types.

/// Errors from read-path calls to the live backend.
///
/// The write path (`submit_task_response`) deliberately does not use
/// this type — it returns a tagged [`SubmitOutcome`](crate::SubmitOutcome)
/// and never fails with an error value.
#[derive(Debug, thiserror::Error)]
pub enum LiveApiError {
    /// HTTP transport failure (DNS, refused connection, timeout).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The backend returned a non-2xx status.
    #[error("live backend {endpoint} returned {status}: {body}")]
    Backend {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed on a 2xx response.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}
