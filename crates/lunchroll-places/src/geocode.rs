//! Address geocoding.

use lunchroll_core::Coordinate;

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::types::GeocodeResponse;

impl PlacesClient {
    /// Resolves a free-text address to the location of the first result.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::InvalidInput`] if `address` is blank.
    /// - [`PlacesError::NoResults`] if the provider finds nothing.
    /// - [`PlacesError::Api`] on provider-level failure (bad key, quota).
    /// - [`PlacesError::Http`] on network failure.
    /// - [`PlacesError::Deserialize`] if the response shape is unexpected.
    pub async fn geocode(&self, address: &str) -> Result<Coordinate, PlacesError> {
        if address.trim().is_empty() {
            return Err(PlacesError::InvalidInput(
                "address must not be empty".to_string(),
            ));
        }

        let context = format!("geocode(address={address})");
        let url = self.build_url("geocode/json", &[("address", address)])?;
        let body = self.request_json(url, &context).await?;
        let response: GeocodeResponse = Self::decode(body, &context)?;

        let first = response
            .results
            .into_iter()
            .next()
            .ok_or(PlacesError::NoResults { context })?;

        let location = first.geometry.location;
        tracing::debug!(
            address,
            resolved = first.formatted_address.as_deref().unwrap_or(""),
            lat = location.lat,
            lng = location.lng,
            "geocoded address"
        );

        Coordinate::new(location.lat, location.lng)
            .map_err(|e| PlacesError::InvalidInput(e.to_string()))
    }
}
