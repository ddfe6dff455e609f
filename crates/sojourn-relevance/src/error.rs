use thiserror::Error;

/// Errors returned by the scoring service client.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The scoring service returned an unusable response envelope.
    #[error("scoring API error: {0}")]
    Api(String),

    /// The reply content did not contain a parseable score array.
    #[error("unparseable scoring reply: {reason}")]
    Parse { reason: String },

    /// The configured base URL is not parseable.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}
