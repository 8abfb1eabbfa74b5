use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{Category, Coordinates, NearbyPoint, Panorama};
use crate::error::Error;

#[async_trait]
pub trait TeleportAPI {
    async fn teleport(&self) -> Coordinates;
}

#[async_trait]
pub trait PanoramaAPI {
    async fn resolve_panorama(&self, coordinates: Option<Coordinates>) -> Result<Panorama, Error>;
}

#[async_trait]
pub trait NearbyAPI {
    /// Provider failures never surface here; they are replaced by fallback points.
    async fn resolve_nearby(
        &self,
        coordinates: Option<Coordinates>,
        category: Category,
    ) -> Result<Vec<NearbyPoint>, Error>;
}

pub trait API: TeleportAPI + PanoramaAPI + NearbyAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
