//! Places API response types.
//!
//! Every endpoint wraps its payload in a `{"status": "...", ...}` envelope;
//! the status is checked on the raw JSON before these types are decoded, so
//! they only model the payload fields.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// geocode
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
    #[serde(default)]
    pub formatted_address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

// ---------------------------------------------------------------------------
// place/nearbysearch
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    #[serde(default)]
    pub results: Vec<NearbyResult>,
    /// Opaque continuation token; absent on the last page.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// A single nearby place. `name` and `place_id` are optional here so that a
/// malformed entry can be skipped instead of failing the whole page.
#[derive(Debug, Deserialize)]
pub struct NearbyResult {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
}

#[derive(Debug, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub open_now: Option<bool>,
}

// ---------------------------------------------------------------------------
// place/details
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    #[serde(default)]
    pub result: Option<DetailsResult>,
}

/// Only the fields requested through the `fields` selector.
#[derive(Debug, Deserialize)]
pub struct DetailsResult {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub website: Option<String>,
}

// ---------------------------------------------------------------------------
// distancematrix
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct DistanceMatrixResponse {
    #[serde(default)]
    pub rows: Vec<DistanceRow>,
}

#[derive(Debug, Deserialize)]
pub struct DistanceRow {
    #[serde(default)]
    pub elements: Vec<DistanceElement>,
}

/// One origin/destination pair. `status` is `"OK"` when a route exists.
#[derive(Debug, Deserialize)]
pub struct DistanceElement {
    pub status: String,
    #[serde(default)]
    pub distance: Option<TextValue>,
    #[serde(default)]
    pub duration: Option<TextValue>,
}

/// A provider-formatted, human-readable distance or duration.
#[derive(Debug, Deserialize)]
pub struct TextValue {
    pub text: String,
}
