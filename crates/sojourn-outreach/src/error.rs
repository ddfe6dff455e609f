use thiserror::Error;

/// Errors returned by the email gateway client.
#[derive(Debug, Error)]
pub enum OutreachError {
    /// Network failure or a non-2xx gateway response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL is not parseable.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}
