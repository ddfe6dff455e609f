use thiserror::Error;

/// Fatal discovery-run failures.
///
/// Exhaustion outcomes (no search results, no emailable candidates) are not
/// errors; they produce a successful, explained, empty result.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// The search or detail provider rejected the run-opening call.
    #[error("place search failed: {0}")]
    Places(#[from] sojourn_places::PlacesError),

    /// The batched scoring call failed. Relevance is core to ranking, so
    /// there is no unscored fallback for the run.
    #[error("relevance scoring failed: {0}")]
    Scoring(#[from] sojourn_relevance::ScoringError),
}
