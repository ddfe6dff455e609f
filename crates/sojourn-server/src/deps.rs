//! External-service clients assembled from configuration.
//!
//! Credentials are injected at construction; nothing below this point reads
//! the environment. A missing credential disables the endpoint that needs
//! it and surfaces per request as a `config_error`, mirroring the rest of
//! the service staying usable.

use sojourn_contact::ContactFinder;
use sojourn_core::AppConfig;
use sojourn_outreach::MailerClient;
use sojourn_pipeline::ScoutService;
use sojourn_places::PlacesClient;
use sojourn_relevance::ScoringClient;

pub struct ServiceDeps {
    scout: Option<ScoutService>,
    mailer: Option<MailerClient>,
    signup_base_url: String,
}

impl ServiceDeps {
    /// Assembles clients for every credentialed upstream present in config.
    ///
    /// # Errors
    ///
    /// Fails only on client construction problems (e.g. TLS setup), never
    /// on missing credentials.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let scout = match (&config.places_api_key, &config.scoring_api_key) {
            (Some(places_key), Some(scoring_key)) => {
                let places = PlacesClient::new(places_key, config.http_timeout_secs)?;
                let contact =
                    ContactFinder::new(config.probe_timeout_secs, &config.contact_user_agent)?;
                let scoring = match &config.scoring_base_url {
                    Some(base) => ScoringClient::with_base_url(
                        scoring_key,
                        &config.scoring_model,
                        config.scoring_timeout_secs,
                        base,
                    )?,
                    None => ScoringClient::new(
                        scoring_key,
                        &config.scoring_model,
                        config.scoring_timeout_secs,
                    )?,
                };
                Some(ScoutService::new(
                    places,
                    contact,
                    scoring,
                    config.detail_concurrency,
                ))
            }
            _ => {
                tracing::warn!(
                    "GOOGLE_PLACES_API_KEY and/or OPENAI_API_KEY not set; vendor discovery disabled"
                );
                None
            }
        };

        let mailer = match &config.mailer_api_key {
            Some(key) => Some(MailerClient::new(
                key,
                &config.outreach_from,
                config.mailer_timeout_secs,
            )?),
            None => {
                tracing::warn!("RESEND_API_KEY not set; vendor outreach disabled");
                None
            }
        };

        Ok(Self {
            scout,
            mailer,
            signup_base_url: config.signup_base_url.clone(),
        })
    }

    /// Assembles deps from already-built clients (tests point these at
    /// wiremock).
    #[must_use]
    pub fn new(
        scout: Option<ScoutService>,
        mailer: Option<MailerClient>,
        signup_base_url: String,
    ) -> Self {
        Self {
            scout,
            mailer,
            signup_base_url,
        }
    }

    pub fn scout(&self) -> Option<&ScoutService> {
        self.scout.as_ref()
    }

    pub fn mailer(&self) -> Option<&MailerClient> {
        self.mailer.as_ref()
    }

    pub fn signup_base_url(&self) -> &str {
        &self.signup_base_url
    }
}
