use lunchroll_core::{Coordinate, NearbyPage, PlaceDetails, PlacesProvider, WalkingDistance};

use crate::client::PlacesClient;
use crate::error::PlacesError;

impl PlacesProvider for PlacesClient {
    type Error = PlacesError;

    async fn geocode(&self, address: &str) -> Result<Coordinate, PlacesError> {
        PlacesClient::geocode(self, address).await
    }

    async fn nearby_page(
        &self,
        origin: Coordinate,
        page_token: Option<&str>,
    ) -> Result<NearbyPage, PlacesError> {
        PlacesClient::nearby_page(self, origin, page_token).await
    }

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError> {
        PlacesClient::place_details(self, place_id).await
    }

    async fn walking_distance(
        &self,
        origin: Coordinate,
        place_id: &str,
    ) -> Result<WalkingDistance, PlacesError> {
        PlacesClient::walking_distance(self, origin, place_id).await
    }
}
