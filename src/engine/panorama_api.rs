use super::Engine;

use async_trait::async_trait;

use crate::{
    api::PanoramaAPI,
    entities::{Coordinates, Panorama},
    error::{invalid_coordinate_error, Error},
};

#[async_trait]
impl PanoramaAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn resolve_panorama(&self, coordinates: Option<Coordinates>) -> Result<Panorama, Error> {
        let key = self.credential()?;
        let coordinates = coordinates.ok_or_else(invalid_coordinate_error)?;

        // The embed is not validated against the provider; missing imagery
        // only shows up when the page renders it.
        let url = self.maps.streetview_embed_url(key, coordinates);

        Ok(Panorama { url })
    }
}
