use super::Engine;

use async_trait::async_trait;

use crate::{
    api::NearbyAPI,
    entities::{fallback_points, Category, Coordinates, NearbyPoint},
    error::{invalid_coordinate_error, Error},
};

#[async_trait]
impl NearbyAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn resolve_nearby(
        &self,
        coordinates: Option<Coordinates>,
        category: Category,
    ) -> Result<Vec<NearbyPoint>, Error> {
        let key = self.credential()?;
        let coordinates = coordinates.ok_or_else(invalid_coordinate_error)?;

        let places = match self
            .maps
            .nearby_search(key, coordinates, category.provider_type())
            .await
        {
            Ok(places) => places,
            Err(err) => {
                tracing::error!(error = %err, "nearby search unavailable, using fallback points");
                return Ok(fallback_points(coordinates));
            }
        };

        tracing::info!(count = places.len(), "nearby search returned places");

        if places.is_empty() {
            tracing::warn!("nearby search returned no places, using fallback points");
            return Ok(fallback_points(coordinates));
        }

        Ok(places.into_iter().map(NearbyPoint::from).collect())
    }
}
