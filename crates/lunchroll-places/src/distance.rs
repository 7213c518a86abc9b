//! Walking distance and duration via the distance matrix.

use lunchroll_core::{Coordinate, WalkingDistance};

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::types::DistanceMatrixResponse;

impl PlacesClient {
    /// Computes the walking distance from `origin` to the place identified by
    /// `place_id`. Only the first row's first element is read.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::NoResults`] if the matrix is empty or the element has
    ///   no walking route (`NOT_FOUND`, `ZERO_RESULTS`).
    /// - [`PlacesError::Api`] on provider-level failure.
    /// - [`PlacesError::Http`] on network failure.
    /// - [`PlacesError::Deserialize`] if the response shape is unexpected.
    pub async fn walking_distance(
        &self,
        origin: Coordinate,
        place_id: &str,
    ) -> Result<WalkingDistance, PlacesError> {
        let context = format!("distancematrix(place_id={place_id})");
        let origins = origin.to_string();
        let destinations = format!("place_id:{place_id}");
        let url = self.build_url(
            "distancematrix/json",
            &[
                ("origins", origins.as_str()),
                ("destinations", destinations.as_str()),
                ("mode", "walking"),
            ],
        )?;
        let body = self.request_json(url, &context).await?;
        let response: DistanceMatrixResponse = Self::decode(body, &context)?;

        let element = response
            .rows
            .into_iter()
            .next()
            .and_then(|row| row.elements.into_iter().next())
            .ok_or_else(|| PlacesError::NoResults {
                context: context.clone(),
            })?;

        if element.status != "OK" {
            return Err(PlacesError::NoResults {
                context: format!("{context}: element status {}", element.status),
            });
        }

        match (element.distance, element.duration) {
            (Some(distance), Some(duration)) => Ok(WalkingDistance {
                distance_text: distance.text,
                duration_text: duration.text,
            }),
            _ => Err(PlacesError::NoResults {
                context: format!("{context}: element without distance or duration"),
            }),
        }
    }
}
