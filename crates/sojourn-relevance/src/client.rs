use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::ScoringError;
use crate::parse::parse_scores;
use crate::prompt::{build_user_prompt, SYSTEM_PROMPT};
use crate::types::{ScoutContext, VendorForScoring, VendorScore};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/";

/// Client for the chat-completions scoring service.
///
/// Use [`ScoringClient::new`] for production or
/// [`ScoringClient::with_base_url`] to point at a mock server or a
/// self-hosted gateway.
pub struct ScoringClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: Url,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ChatReplyMessage {
    content: String,
}

impl ScoringClient {
    /// Creates a new client pointed at the production scoring service.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, ScoringError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with
    /// wiremock, or an OpenAI-compatible gateway).
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ScoringError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ScoringError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("sojourn-scout/0.1 (vendor-discovery)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|_| ScoringError::InvalidBaseUrl(base_url.to_owned()))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            base_url,
        })
    }

    /// Scores the full vendor list against the requester context in one
    /// batched call.
    ///
    /// The returned entries are keyed by vendor name; a vendor the service
    /// omitted is simply absent and is defaulted by the caller. An empty
    /// vendor list short-circuits to an empty reply without a service call.
    ///
    /// # Errors
    ///
    /// - [`ScoringError::Http`] on transport failure or non-2xx status.
    /// - [`ScoringError::Api`] if the reply envelope carries no choices.
    /// - [`ScoringError::Parse`] if the reply content has no usable score
    ///   array.
    pub async fn score_vendors(
        &self,
        vendors: &[VendorForScoring],
        context: &ScoutContext,
    ) -> Result<Vec<VendorScore>, ScoringError> {
        if vendors.is_empty() {
            return Ok(Vec::new());
        }

        let user_prompt = build_user_prompt(vendors, context);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user_prompt,
                },
            ],
            temperature: 0.2,
        };

        let url = self
            .base_url
            .join("v1/chat/completions")
            .map_err(|_| ScoringError::InvalidBaseUrl(self.base_url.to_string()))?;

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let envelope: ChatResponse = response.json().await?;
        let content = envelope
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ScoringError::Api("reply contained no choices".to_owned()))?;

        let scores = parse_scores(&content)?;
        tracing::debug!(
            vendors = vendors.len(),
            scored = scores.len(),
            "scoring call completed"
        );
        Ok(scores)
    }
}
