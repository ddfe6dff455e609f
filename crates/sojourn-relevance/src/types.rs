use serde::Deserialize;

/// Vendor fields forwarded to the scoring service.
#[derive(Debug, Clone)]
pub struct VendorForScoring {
    pub name: String,
    pub address: String,
    pub website: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub email: String,
}

/// Requester context the scores are judged against.
#[derive(Debug, Clone)]
pub struct ScoutContext {
    pub category: String,
    pub location: String,
    pub retreat_description: Option<String>,
}

/// One scored vendor from the service reply, matched back to candidates by
/// exact name equality.
#[derive(Debug, Clone, Deserialize)]
pub struct VendorScore {
    pub name: String,
    /// Nominally in [0, 100]; callers clamp when merging.
    pub relevance_score: i64,
    pub relevance_reason: String,
}
