use serde::Serialize;

/// Immutable input to one discovery run.
#[derive(Debug, Clone)]
pub struct ScoutRequest {
    pub location: String,
    pub category: String,
    pub retreat_description: Option<String>,
}

/// A candidate that survived email discovery and received a relevance
/// score; the unit returned to callers. `email` is non-empty for every
/// vendor that reaches this type: candidates without one are excluded
/// before construction.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedVendor {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub email: String,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub category: String,
    /// 0–100, from the scoring service or the merge-time default.
    pub relevance_score: u8,
    pub relevance_reason: String,
    pub photo_url: Option<String>,
}

/// Result of one discovery run: vendors sorted descending by relevance
/// score, plus a human-readable summary of what happened.
#[derive(Debug, Clone, Serialize)]
pub struct ScoutResult {
    pub vendors: Vec<EnrichedVendor>,
    pub search_summary: String,
}
