use thiserror::Error;

/// Errors returned by the place-search provider client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a non-success envelope status.
    #[error("places API error ({status}): {message}")]
    Api { status: String, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL is not parseable.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}
