use futures::stream::{self, StreamExt};

use sojourn_contact::ContactFinder;
use sojourn_places::{PlaceCandidate, PlaceDetails, PlacesClient};
use sojourn_relevance::{ScoringClient, ScoutContext, VendorForScoring};

use crate::assemble::{self, Survivor};
use crate::error::ScoutError;
use crate::types::{ScoutRequest, ScoutResult};

/// One discovery run end to end.
///
/// Holds the three external clients for a request's lifetime; no state is
/// shared across runs, so concurrent requests never contend.
pub struct ScoutService {
    places: PlacesClient,
    contact: ContactFinder,
    scoring: ScoringClient,
    detail_concurrency: usize,
}

impl ScoutService {
    #[must_use]
    pub fn new(
        places: PlacesClient,
        contact: ContactFinder,
        scoring: ScoringClient,
        detail_concurrency: usize,
    ) -> Self {
        Self {
            places,
            contact,
            scoring,
            detail_concurrency,
        }
    }

    /// Runs the full pipeline for one request.
    ///
    /// Zero search results and zero emailable candidates are successful
    /// outcomes with an explanatory summary. A failed search call or a
    /// failed scoring call aborts the run.
    ///
    /// # Errors
    ///
    /// - [`ScoutError::Places`] if the opening search call fails.
    /// - [`ScoutError::Scoring`] if the batched scoring call fails.
    pub async fn run(&self, request: &ScoutRequest) -> Result<ScoutResult, ScoutError> {
        let query = format!("{} near {}", request.category, request.location);
        tracing::info!(%query, "starting vendor discovery");

        let candidates = self.places.text_search(&query).await?;
        if candidates.is_empty() {
            tracing::info!(%query, "search returned no candidates");
            return Ok(assemble::empty_search_result(request));
        }
        let found_count = candidates.len();

        let detailed = self.fetch_details(candidates).await;
        let survivors = self.discover_contacts(detailed).await;
        tracing::info!(
            found = found_count,
            emailable = survivors.len(),
            "contact discovery finished"
        );

        if survivors.is_empty() {
            return Ok(assemble::no_contact_result(request, found_count));
        }

        let for_scoring: Vec<VendorForScoring> = survivors
            .iter()
            .map(|s| VendorForScoring {
                name: s.name.clone(),
                address: s.address.clone(),
                website: s.website.clone(),
                rating: s.rating,
                review_count: s.review_count,
                email: s.email.clone(),
            })
            .collect();
        let context = ScoutContext {
            category: request.category.clone(),
            location: request.location.clone(),
            retreat_description: request.retreat_description.clone(),
        };
        let scores = self.scoring.score_vendors(&for_scoring, &context).await?;

        Ok(assemble::assemble(request, survivors, scores))
    }

    /// Fetches detail records through a bounded worker pool.
    ///
    /// A failed fetch drops that candidate and never aborts the batch;
    /// aggregation order does not matter because ranking happens at
    /// assembly.
    async fn fetch_details(
        &self,
        candidates: Vec<PlaceCandidate>,
    ) -> Vec<(PlaceCandidate, PlaceDetails)> {
        let concurrency = self.pool_size(candidates.len());
        let places = &self.places;

        let results: Vec<Option<(PlaceCandidate, PlaceDetails)>> = stream::iter(candidates)
            .map(|candidate| async move {
                match places.place_details(&candidate.place_id).await {
                    Ok(details) => Some((candidate, details)),
                    Err(e) => {
                        tracing::warn!(
                            place_id = %candidate.place_id,
                            name = %candidate.name,
                            error = %e,
                            "detail fetch failed; dropping candidate"
                        );
                        None
                    }
                }
            })
            .buffer_unordered(concurrency)
            .collect()
            .await;

        results.into_iter().flatten().collect()
    }

    /// Runs contact discovery per candidate and applies the exclusion
    /// policy: no discoverable email, no vendor. Probes within one
    /// candidate stay sequential so the first page with a match wins;
    /// candidates fan out concurrently.
    async fn discover_contacts(
        &self,
        detailed: Vec<(PlaceCandidate, PlaceDetails)>,
    ) -> Vec<Survivor> {
        let concurrency = self.pool_size(detailed.len());
        let contact = &self.contact;
        let places = &self.places;

        let results: Vec<Option<Survivor>> = stream::iter(detailed)
            .map(|(candidate, details)| async move {
                let Some(website) = details.website.clone() else {
                    tracing::debug!(name = %candidate.name, "no website; excluding candidate");
                    return None;
                };
                let Some(email) = contact.discover(&website).await else {
                    tracing::debug!(name = %candidate.name, "no contact email; excluding candidate");
                    return None;
                };
                let photo_url = details.photo_reference().map(|r| places.photo_url(r));
                Some(Survivor {
                    name: candidate.name,
                    address: candidate.formatted_address,
                    phone: details.phone,
                    website: details.website,
                    email,
                    rating: details.rating,
                    review_count: details.review_count,
                    photo_url,
                })
            })
            .buffer_unordered(concurrency)
            .collect()
            .await;

        results.into_iter().flatten().collect()
    }

    fn pool_size(&self, len: usize) -> usize {
        self.detail_concurrency.clamp(1, len.max(1))
    }
}
