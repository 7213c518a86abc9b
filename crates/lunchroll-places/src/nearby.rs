//! Rank-by-distance nearby search, one page per call.

use lunchroll_core::{Candidate, Coordinate, NearbyPage};

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::types::{NearbyResult, NearbySearchResponse};

/// Place type the nearby search is restricted to.
const PLACE_TYPE: &str = "restaurant";

impl PlacesClient {
    /// Fetches one page of restaurants ordered by distance from `origin`.
    ///
    /// Without `page_token` this issues the initial search. With a token it
    /// requests the page that token refers to; the provider rejects tokens
    /// that are used before their activation delay, which is the caller's
    /// responsibility. `ZERO_RESULTS` yields an empty page.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] on provider-level failure, including a token
    ///   that is not yet valid (`INVALID_REQUEST`).
    /// - [`PlacesError::Http`] on network failure.
    /// - [`PlacesError::Deserialize`] if the response shape is unexpected.
    pub async fn nearby_page(
        &self,
        origin: Coordinate,
        page_token: Option<&str>,
    ) -> Result<NearbyPage, PlacesError> {
        let location = origin.to_string();
        let (url, context) = match page_token {
            Some(token) => (
                self.build_url("place/nearbysearch/json", &[("pagetoken", token)])?,
                "nearbysearch(pagetoken)".to_string(),
            ),
            None => (
                self.build_url(
                    "place/nearbysearch/json",
                    &[
                        ("location", location.as_str()),
                        ("rankby", "distance"),
                        ("type", PLACE_TYPE),
                    ],
                )?,
                format!("nearbysearch(location={location})"),
            ),
        };

        let body = self.request_json(url, &context).await?;
        if Self::is_zero_results(&body) {
            return Ok(NearbyPage::default());
        }
        let response: NearbySearchResponse = Self::decode(body, &context)?;

        let candidates = response
            .results
            .into_iter()
            .filter_map(to_candidate)
            .collect();

        Ok(NearbyPage {
            candidates,
            next_page_token: response.next_page_token.filter(|t| !t.is_empty()),
        })
    }
}

/// Converts one raw result; entries without a name or place id are skipped.
/// A missing `open_now` counts as closed.
fn to_candidate(result: NearbyResult) -> Option<Candidate> {
    let (Some(name), Some(place_id)) = (result.name, result.place_id) else {
        tracing::warn!("nearby search: skipping result without name or place_id");
        return None;
    };
    let open_now = result
        .opening_hours
        .and_then(|h| h.open_now)
        .unwrap_or(false);
    Some(Candidate {
        name,
        place_id,
        open_now,
    })
}
