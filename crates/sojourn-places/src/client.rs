use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::types::{DetailsResponse, PlaceCandidate, PlaceDetails, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/";

/// Fixed field projection requested from the details endpoint. Keeping the
/// projection narrow keeps per-candidate cost flat.
const DETAIL_FIELDS: &str =
    "name,formatted_address,formatted_phone_number,website,rating,user_ratings_total,photos";

/// Upper bound on candidates returned by [`PlacesClient::text_search`],
/// which in turn bounds detail fetches and contact probes downstream.
pub const MAX_CANDIDATES: usize = 10;

/// Client for the place-search provider.
///
/// Manages the HTTP client, API key, and base URL. Use [`PlacesClient::new`]
/// for production or [`PlacesClient::with_base_url`] to point at a mock
/// server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production provider.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("sojourn-scout/0.1 (vendor-discovery)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join resolves endpoint paths under the root rather than
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|_| PlacesError::InvalidBaseUrl(base_url.to_owned()))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Runs one free-text search and returns up to [`MAX_CANDIDATES`]
    /// candidates in provider rank order.
    ///
    /// Zero matches is a normal outcome and yields an empty list, not an
    /// error; the provider signals it with a dedicated envelope status.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the provider rejects the request.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn text_search(&self, query: &str) -> Result<Vec<PlaceCandidate>, PlacesError> {
        let url = self.build_url("maps/api/place/textsearch/json", &[("query", query)])?;
        let body = self.request_json(&url).await?;
        Self::check_status(&body)?;

        let envelope: SearchResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("textsearch(query={query})"),
                source: e,
            })?;

        let mut candidates = envelope.results;
        candidates.truncate(MAX_CANDIDATES);
        Ok(candidates)
    }

    /// Fetches the fixed detail projection for one candidate.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the provider rejects the request or does
    ///   not know the `place_id`.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError> {
        let url = self.build_url(
            "maps/api/place/details/json",
            &[("place_id", place_id), ("fields", DETAIL_FIELDS)],
        )?;
        let body = self.request_json(&url).await?;
        Self::check_status(&body)?;

        let envelope: DetailsResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("details(place_id={place_id})"),
                source: e,
            })?;

        Ok(envelope.result)
    }

    /// Renders the provider photo URL for a photo reference token.
    #[must_use]
    pub fn photo_url(&self, reference: &str) -> String {
        let mut url = self
            .base_url
            .join("maps/api/place/photo")
            .unwrap_or_else(|_| self.base_url.clone());
        url.query_pairs_mut()
            .append_pair("maxwidth", "400")
            .append_pair("photo_reference", reference)
            .append_pair("key", &self.api_key);
        url.to_string()
    }

    /// Builds the full request URL with the API key and properly
    /// percent-encoded query parameters.
    fn build_url(&self, path: &str, extra: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|_| PlacesError::InvalidBaseUrl(self.base_url.to_string()))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] on network failure or a non-2xx status.
    /// Returns [`PlacesError::Deserialize`] if the body is not valid JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, PlacesError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: url.path().to_owned(),
            source: e,
        })
    }

    /// Checks the top-level `"status"` field of the provider envelope.
    ///
    /// `"OK"` and `"ZERO_RESULTS"` are both success; `ZERO_RESULTS` simply
    /// leaves the result list empty. Anything else carries the provider's
    /// `error_message` when present.
    fn check_status(body: &serde_json::Value) -> Result<(), PlacesError> {
        let status = body
            .get("status")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("MISSING_STATUS");

        if status == "OK" || status == "ZERO_RESULTS" {
            return Ok(());
        }

        let message = body
            .get("error_message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("no error message provided")
            .to_string();
        Err(PlacesError::Api {
            status: status.to_owned(),
            message,
        })
    }
}
