//! Place detail lookup with a field selector.

use lunchroll_core::PlaceDetails;
use reqwest::Url;

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::types::DetailsResponse;

/// The only fields requested; the provider bills by field group.
const DETAIL_FIELDS: &str = "name,rating,website";

impl PlacesClient {
    /// Fetches name, rating and website for `place_id`.
    ///
    /// A website that does not parse as an absolute URL is dropped with a
    /// warning rather than failing the lookup.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::NoResults`] if the response carries no result.
    /// - [`PlacesError::Api`] on provider-level failure.
    /// - [`PlacesError::Http`] on network failure.
    /// - [`PlacesError::Deserialize`] if the response shape is unexpected.
    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError> {
        let context = format!("details(place_id={place_id})");
        let url = self.build_url(
            "place/details/json",
            &[("place_id", place_id), ("fields", DETAIL_FIELDS)],
        )?;
        let body = self.request_json(url, &context).await?;
        let response: DetailsResponse = Self::decode(body, &context)?;
        let result = response.result.ok_or(PlacesError::NoResults { context })?;

        let website = result.website.and_then(|raw| match Url::parse(&raw) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(
                    place_id,
                    website = %raw,
                    error = %e,
                    "ignoring unparseable website"
                );
                None
            }
        });

        Ok(PlaceDetails {
            name: result.name,
            rating: result.rating,
            website,
        })
    }
}
