use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::entities::Coordinates;

pub async fn find(Extension(api): Extension<DynAPI>) -> Json<Coordinates> {
    let coordinates = api.teleport().await;

    coordinates.into()
}
