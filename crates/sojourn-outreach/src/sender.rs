use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::compose::OutreachMessage;
use crate::error::OutreachError;

const DEFAULT_BASE_URL: &str = "https://api.resend.com/";

/// Client for the transactional-email gateway.
///
/// Use [`MailerClient::new`] for production or
/// [`MailerClient::with_base_url`] to point at a mock server in tests.
pub struct MailerClient {
    client: Client,
    api_key: String,
    from: String,
    base_url: Url,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    #[serde(default)]
    id: Option<String>,
}

impl MailerClient {
    /// Creates a new client pointed at the production gateway.
    ///
    /// `from` is the verified sender identity, e.g.
    /// `"Sojourn Partnerships <partners@sojourn.travel>"`.
    ///
    /// # Errors
    ///
    /// Returns [`OutreachError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, from: &str, timeout_secs: u64) -> Result<Self, OutreachError> {
        Self::with_base_url(api_key, from, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`OutreachError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`OutreachError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        from: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, OutreachError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("sojourn-scout/0.1 (vendor-outreach)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|_| OutreachError::InvalidBaseUrl(base_url.to_owned()))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            from: from.to_owned(),
            base_url,
        })
    }

    /// Dispatches one composed message.
    ///
    /// A gateway rejection or transport failure is fatal to the outreach
    /// request and must reach the caller; unlike the outreach log write,
    /// a vendor never being emailed is not something to paper over.
    ///
    /// # Errors
    ///
    /// Returns [`OutreachError::Http`] on transport failure or a non-2xx
    /// gateway status.
    pub async fn send(&self, message: &OutreachMessage) -> Result<(), OutreachError> {
        let url = self
            .base_url
            .join("emails")
            .map_err(|_| OutreachError::InvalidBaseUrl(self.base_url.to_string()))?;

        let request = SendRequest {
            from: &self.from,
            to: [message.to.as_str()],
            subject: &message.subject,
            html: &message.html,
            text: &message.text,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: SendResponse = response.json().await.unwrap_or(SendResponse { id: None });
        tracing::info!(
            to = %message.to,
            gateway_id = body.id.as_deref().unwrap_or("unknown"),
            "outreach email accepted by gateway"
        );
        Ok(())
    }
}
