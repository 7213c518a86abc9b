//! The provider capability the pipeline is written against.
//!
//! One implementation exists (`lunchroll-places`); tests substitute in-memory
//! fakes. Every method returns normalized domain types so the pipeline never
//! sees a provider response shape.

use std::future::Future;

use reqwest::Url;

use crate::restaurant::{Candidate, Coordinate};

/// One page of a nearby search, in the order the provider ranked it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NearbyPage {
    pub candidates: Vec<Candidate>,
    /// Present when the provider has another page for this search.
    pub next_page_token: Option<String>,
}

/// Descriptive fields for a single place.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetails {
    pub name: Option<String>,
    pub rating: Option<f64>,
    pub website: Option<Url>,
}

/// Human-readable walking distance and duration between two points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkingDistance {
    pub distance_text: String,
    pub duration_text: String,
}

/// Geocoding, nearby search, place detail and walking distance lookups.
pub trait PlacesProvider {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Resolves a free-text address to the first matching coordinate.
    fn geocode(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Coordinate, Self::Error>> + Send;

    /// Fetches the first page of a rank-by-distance search around `origin`,
    /// or the page identified by `page_token` when given.
    fn nearby_page(
        &self,
        origin: Coordinate,
        page_token: Option<&str>,
    ) -> impl Future<Output = Result<NearbyPage, Self::Error>> + Send;

    /// Looks up name, rating and website for a place.
    fn place_details(
        &self,
        place_id: &str,
    ) -> impl Future<Output = Result<PlaceDetails, Self::Error>> + Send;

    /// Walking distance and duration from `origin` to the place.
    fn walking_distance(
        &self,
        origin: Coordinate,
        place_id: &str,
    ) -> impl Future<Output = Result<WalkingDistance, Self::Error>> + Send;
}
