use serde::Deserialize;

/// A business returned by text search. Minimal identity only; extended
/// fields come from a follow-up details call keyed by `place_id`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceCandidate {
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    pub business_status: Option<String>,
}

/// Extended detail record for one candidate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetails {
    #[serde(rename = "formatted_phone_number")]
    pub phone: Option<String>,
    pub website: Option<String>,
    /// Provider rating in [0, 5].
    pub rating: Option<f64>,
    #[serde(rename = "user_ratings_total")]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub photos: Vec<PhotoRef>,
}

impl PlaceDetails {
    /// Reference token of the first photo, if the place has any.
    #[must_use]
    pub fn photo_reference(&self) -> Option<&str> {
        self.photos.first().map(|p| p.photo_reference.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoRef {
    pub photo_reference: String,
}

/// Envelope for the text-search endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<PlaceCandidate>,
}

/// Envelope for the place-details endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct DetailsResponse {
    pub result: PlaceDetails,
}
