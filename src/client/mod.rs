mod http;
mod session;

use async_trait::async_trait;

use crate::entities::{Category, Coordinates, NearbyPoint, Panorama};
use crate::error::Error;

pub use http::HttpClient;
pub use session::{Session, Status, VisitState};

#[async_trait]
pub trait ServerAPI {
    async fn teleport(&self) -> Result<Coordinates, Error>;

    async fn streetview(&self, coordinates: Coordinates) -> Result<Panorama, Error>;

    async fn places(
        &self,
        coordinates: Coordinates,
        category: Category,
    ) -> Result<Vec<NearbyPoint>, Error>;
}
