use axum::extract::{Extension, Json, Query};
use serde::Deserialize;

use crate::api::DynAPI;
use crate::entities::{Coordinates, Panorama};
use crate::error::Error;

#[derive(Deserialize)]
pub struct FindParams {
    lat: Option<String>,
    lng: Option<String>,
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<FindParams>,
) -> Result<Json<Panorama>, Error> {
    let coordinates = Coordinates::parse(params.lat.as_deref(), params.lng.as_deref());
    let panorama = api.resolve_panorama(coordinates).await?;

    Ok(panorama.into())
}
