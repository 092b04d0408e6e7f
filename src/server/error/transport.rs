use thiserror::Error;

/// Failures while talking to an outbound HTTP collaborator (REST APIs, mail gateway).
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request could not be sent or the response could not be read.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The remote side answered with a non-success status.
    #[error("Request to {url} failed with status {status}")]
    Status {
        /// Target URL of the failed request
        url: String,
        /// Status returned by the remote side
        status: reqwest::StatusCode,
    },

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
