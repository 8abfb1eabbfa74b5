use super::Engine;

use async_trait::async_trait;

use crate::{api::TeleportAPI, entities::city, entities::Coordinates};

#[async_trait]
impl TeleportAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn teleport(&self) -> Coordinates {
        let coordinates = city::random_coordinates();

        tracing::info!(lat = coordinates.lat, lng = coordinates.lng, "teleporting");

        coordinates
    }
}
