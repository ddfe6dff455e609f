use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Place-search provider key. Absent keys are reported per request,
    /// not at startup, so the rest of the service stays usable.
    pub places_api_key: Option<String>,
    pub scoring_api_key: Option<String>,
    pub scoring_model: String,
    /// Override for self-hosted chat-completion gateways and tests.
    pub scoring_base_url: Option<String>,
    pub mailer_api_key: Option<String>,
    pub outreach_from: String,
    pub signup_base_url: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub http_timeout_secs: u64,
    pub scoring_timeout_secs: u64,
    pub mailer_timeout_secs: u64,
    pub probe_timeout_secs: u64,
    pub contact_user_agent: String,
    pub detail_concurrency: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("database_url", &"[redacted]")
            .field(
                "places_api_key",
                &self.places_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "scoring_api_key",
                &self.scoring_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("scoring_model", &self.scoring_model)
            .field("scoring_base_url", &self.scoring_base_url)
            .field(
                "mailer_api_key",
                &self.mailer_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("outreach_from", &self.outreach_from)
            .field("signup_base_url", &self.signup_base_url)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("scoring_timeout_secs", &self.scoring_timeout_secs)
            .field("mailer_timeout_secs", &self.mailer_timeout_secs)
            .field("probe_timeout_secs", &self.probe_timeout_secs)
            .field("contact_user_agent", &self.contact_user_agent)
            .field("detail_concurrency", &self.detail_concurrency)
            .finish()
    }
}
