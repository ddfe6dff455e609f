//! Score merging, ranking, and summary construction.

use std::collections::HashMap;

use sojourn_relevance::VendorScore;

use crate::types::{EnrichedVendor, ScoutRequest, ScoutResult};

const DEFAULT_SCORE: u8 = 50;
const DEFAULT_REASON: &str = "Matches your search criteria.";

/// A candidate that survived exclusion, before scoring.
#[derive(Debug, Clone)]
pub(crate) struct Survivor {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub email: String,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub photo_url: Option<String>,
}

/// Merges scorer output onto survivors, sorts descending by score, and
/// builds the result summary.
///
/// Scorer entries are matched by exact name; a survivor the scorer omitted
/// gets the default score and rationale rather than failing the run. The
/// sort is stable, so equal scores keep their pre-sort relative order.
pub(crate) fn assemble(
    request: &ScoutRequest,
    survivors: Vec<Survivor>,
    scores: Vec<VendorScore>,
) -> ScoutResult {
    let mut by_name: HashMap<String, (u8, String)> = HashMap::new();
    for score in scores {
        let VendorScore {
            name,
            relevance_score,
            relevance_reason,
        } = score;
        // First entry wins on duplicate names; name collisions are a known
        // limitation of matching on names rather than a stable id.
        by_name
            .entry(name)
            .or_insert_with(|| (clamp_score(relevance_score), relevance_reason));
    }

    let mut vendors: Vec<EnrichedVendor> = survivors
        .into_iter()
        .map(|s| {
            let (relevance_score, relevance_reason) = by_name
                .get(&s.name)
                .cloned()
                .unwrap_or_else(|| (DEFAULT_SCORE, DEFAULT_REASON.to_owned()));
            EnrichedVendor {
                name: s.name,
                address: s.address,
                phone: s.phone,
                website: s.website,
                email: s.email,
                rating: s.rating,
                review_count: s.review_count,
                category: request.category.clone(),
                relevance_score,
                relevance_reason,
                photo_url: s.photo_url,
            }
        })
        .collect();

    vendors.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));

    let search_summary = found_summary(vendors.len(), &request.category, &request.location);
    ScoutResult {
        vendors,
        search_summary,
    }
}

/// Result for a search that returned no candidates at all.
pub(crate) fn empty_search_result(request: &ScoutRequest) -> ScoutResult {
    ScoutResult {
        vendors: Vec::new(),
        search_summary: format!(
            "No {} businesses found near {}.",
            request.category, request.location
        ),
    }
}

/// Result for a search whose candidates all lacked a discoverable email.
pub(crate) fn no_contact_result(request: &ScoutRequest, found_count: usize) -> ScoutResult {
    let noun = if found_count == 1 {
        "business"
    } else {
        "businesses"
    };
    ScoutResult {
        vendors: Vec::new(),
        search_summary: format!(
            "Found {found_count} {} {noun} near {}, but none had a public contact email.",
            request.category, request.location
        ),
    }
}

fn found_summary(count: usize, category: &str, location: &str) -> String {
    let noun = if count == 1 { "vendor" } else { "vendors" };
    format!("Found {count} {category} {noun} near {location} with contact info available.")
}

fn clamp_score(score: i64) -> u8 {
    u8::try_from(score.clamp(0, 100)).unwrap_or(DEFAULT_SCORE)
}
