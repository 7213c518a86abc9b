//! Domain records that flow through the pipeline.
//!
//! Provider response shapes never leave the places crate; everything the
//! pipeline sees is one of the types defined here.

use std::fmt;

use reqwest::Url;
use serde::{Serialize, Serializer};

use crate::ConfigError;

/// A latitude/longitude pair in decimal degrees.
///
/// `Display` always renders `lat,lng` with `.` as the decimal separator, which
/// is the form every provider query expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Builds a coordinate, rejecting non-finite or out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCoordinate`] if either component is not a
    /// finite number within its valid range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidCoordinate {
            input: format!("{latitude},{longitude}"),
            reason: reason.to_string(),
        };
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(invalid("latitude must be within -90..=90"));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid("longitude must be within -180..=180"));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// A nearby place that may be picked. Equality of `name` is what the filter
/// and dedup steps care about; `place_id` is what enrichment looks up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub place_id: String,
    pub open_now: bool,
}

/// One fully enriched restaurant, ready for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantRecord {
    pub name: String,
    pub rating: Option<f64>,
    #[serde(serialize_with = "serialize_optional_url")]
    pub website: Option<Url>,
    pub distance_text: String,
    pub duration_text: String,
}

#[allow(clippy::ref_option)]
fn serialize_optional_url<S: Serializer>(
    url: &Option<Url>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match url {
        Some(u) => serializer.serialize_some(u.as_str()),
        None => serializer.serialize_none(),
    }
}
