//! Client for the place-search provider used by vendor discovery.
//!
//! Wraps the provider's text-search and place-details endpoints with typed
//! response deserialization and envelope status checking. Search results are
//! truncated to [`MAX_CANDIDATES`] before callers fan out detail fetches.

mod client;
mod error;
mod types;

pub use client::{PlacesClient, MAX_CANDIDATES};
pub use error::PlacesError;
pub use types::{PhotoRef, PlaceCandidate, PlaceDetails};
