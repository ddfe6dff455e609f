use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::extract::{extract_emails, select_contact};

/// Errors from [`ContactFinder`] construction. Probe failures are not
/// errors; they degrade to "no email found" per URL.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Builds the fixed probe sequence for a website: root, then the two pages
/// where businesses conventionally publish a mailbox.
#[must_use]
pub fn probe_urls(website: &str) -> [String; 3] {
    let root = website.trim_end_matches('/').to_owned();
    let contact = format!("{root}/contact");
    let about = format!("{root}/about");
    [root, contact, about]
}

/// Discovers a single best contact email for a vendor website.
///
/// Each probe carries its own deadline, enforced by the client's request
/// timeout, so a stalled first URL never eats into the budget of the next.
pub struct ContactFinder {
    client: Client,
}

impl ContactFinder {
    /// Creates a finder whose probes each time out after
    /// `probe_timeout_secs`.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(probe_timeout_secs: u64, user_agent: &str) -> Result<Self, ContactError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(probe_timeout_secs))
            .connect_timeout(Duration::from_secs(probe_timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Probes the website's derived URLs in order and returns the best
    /// contact email from the first page that yields one.
    ///
    /// Timeouts and non-2xx responses move on to the next URL; exhausting
    /// all three without a usable address yields `None`.
    pub async fn discover(&self, website: &str) -> Option<String> {
        for url in probe_urls(website) {
            let Some(body) = self.fetch_page(&url).await else {
                continue;
            };

            let emails = extract_emails(&body);
            if let Some(best) = select_contact(&emails) {
                tracing::debug!(%url, email = %best, "contact email discovered");
                return Some(best);
            }
        }
        tracing::debug!(website, "no contact email discovered on any probe URL");
        None
    }

    /// Fetches one probe URL, returning the body only on a 2xx response
    /// within the probe deadline.
    async fn fetch_page(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::debug!(url, error = %e, "probe failed, moving to next URL");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!(url, status = %response.status(), "probe returned non-2xx");
            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::debug!(url, error = %e, "probe body read failed");
                None
            }
        }
    }
}
