use axum::extract::{Extension, Json, Query};
use serde::Deserialize;

use crate::api::DynAPI;
use crate::entities::{Category, Coordinates, NearbyPoint};
use crate::error::Error;

#[derive(Deserialize)]
pub struct ListParams {
    lat: Option<String>,
    lng: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

pub async fn list(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<NearbyPoint>>, Error> {
    let coordinates = Coordinates::parse(params.lat.as_deref(), params.lng.as_deref());
    let category = Category::from_query(params.kind.as_deref());

    let points = api.resolve_nearby(coordinates, category).await?;

    Ok(points.into())
}
