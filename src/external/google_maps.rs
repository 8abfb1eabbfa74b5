use serde::Deserialize;
use std::time::Duration;

use crate::{
    entities::{Coordinates, NearbyPoint},
    error::{upstream_error, Error},
};

pub const NEARBY_RADIUS: u32 = 1500;

const STREETVIEW_HEADING: u32 = 210;
const STREETVIEW_PITCH: u32 = 10;
const STREETVIEW_FOV: u32 = 80;

/// A Nearby Search result. Any field may be absent or null.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Place {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub vicinity: Option<String>,
    pub formatted_address: Option<String>,
    pub types: Option<Vec<Option<String>>>,
    pub geometry: Option<Geometry>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Geometry {
    pub location: Option<LatLng>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct LatLng {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Clone, Debug, Deserialize)]
struct Response<T> {
    status: String,
    error_message: Option<String>,
    results: Option<T>,
}

impl From<Place> for NearbyPoint {
    fn from(place: Place) -> Self {
        let address = place
            .vicinity
            .filter(|v| !v.is_empty())
            .or(place.formatted_address);

        let categories: Vec<String> = place.types.into_iter().flatten().flatten().collect();

        Self {
            id: place.place_id.unwrap_or_default(),
            name: place.name.unwrap_or_default(),
            // nearby search carries no distance
            distance: None,
            address,
            categories: categories.join(", "),
            coordinates: place
                .geometry
                .and_then(|g| g.location)
                .and_then(|l| Coordinates::from_parts(l.lat, l.lng)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GoogleMaps {
    client: reqwest::Client,
    api_base: String,
    embed_base: String,
}

impl GoogleMaps {
    pub fn new(api_base: String, embed_base: String, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_base,
            embed_base,
        })
    }

    pub fn streetview_embed_url(&self, key: &str, location: Coordinates) -> String {
        let location: String = location.into();

        format!(
            "{}/maps/embed/v1/streetview?key={}&location={}&heading={}&pitch={}&fov={}",
            self.embed_base, key, location, STREETVIEW_HEADING, STREETVIEW_PITCH, STREETVIEW_FOV
        )
    }

    #[tracing::instrument(skip(self, key))]
    pub async fn nearby_search(
        &self,
        key: &str,
        location: Coordinates,
        place_type: &str,
    ) -> Result<Vec<Place>, Error> {
        let location: String = location.into();
        let url = format!("{}/maps/api/place/nearbysearch/json", self.api_base);

        let res = self
            .client
            .get(url)
            .query(&[("key", key)])
            .query(&[("location", location)])
            .query(&[("radius", NEARBY_RADIUS)])
            .query(&[("type", place_type)])
            .send()
            .await?;

        let status_code = res.status();

        if !status_code.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::error!(status = %status_code, %body, "nearby search failed");
            return Err(upstream_error());
        }

        let data: Response<Vec<Place>> = res.json().await?;

        if !(data.status == "OK" || data.status == "ZERO_RESULTS") {
            tracing::error!(
                status = %data.status,
                message = data.error_message.as_deref().unwrap_or(""),
                "nearby search rejected"
            );
            return Err(upstream_error());
        }

        Ok(data.results.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn maps() -> GoogleMaps {
        GoogleMaps::new(
            "https://maps.googleapis.com".into(),
            "https://www.google.com".into(),
            Duration::from_secs(1),
        )
        .unwrap()
    }

    #[test]
    fn embed_url_carries_location_and_view() {
        let url = maps().streetview_embed_url(
            "k3y",
            Coordinates {
                lat: 51.5074,
                lng: -0.1278,
            },
        );

        assert_eq!(
            url,
            "https://www.google.com/maps/embed/v1/streetview?key=k3y&location=51.5074,-0.1278&heading=210&pitch=10&fov=80"
        );
    }

    #[test]
    fn sparse_place_decodes_with_defaults() {
        let place: Place = serde_json::from_value(json!({ "name": "Bare" })).unwrap();
        let point = NearbyPoint::from(place);

        assert_eq!(point.name, "Bare");
        assert_eq!(point.id, "");
        assert_eq!(point.address, None);
        assert_eq!(point.categories, "");
        assert_eq!(point.coordinates, None);
    }

    #[test]
    fn place_maps_to_nearby_point() {
        let place: Place = serde_json::from_value(json!({
            "place_id": "abc",
            "name": "Corner Bar",
            "vicinity": "",
            "formatted_address": "1 Main St, Springfield",
            "types": ["bar", "point_of_interest"],
            "geometry": { "location": { "lat": 10.5, "lng": 20.25 } }
        }))
        .unwrap();

        let point = NearbyPoint::from(place);

        assert_eq!(point.id, "abc");
        assert_eq!(point.distance, None);
        assert_eq!(point.address.as_deref(), Some("1 Main St, Springfield"));
        assert_eq!(point.categories, "bar, point_of_interest");
        assert_eq!(
            point.coordinates,
            Some(Coordinates {
                lat: 10.5,
                lng: 20.25
            })
        );
    }

    #[test]
    fn null_and_half_fields_do_not_sink_the_response() {
        let data: Response<Vec<Place>> = serde_json::from_value(json!({
            "status": "OK",
            "results": [
                {
                    "place_id": "a",
                    "name": "Good",
                    "types": ["cafe"],
                    "geometry": { "location": { "lat": 1.0, "lng": 2.0 } }
                },
                {
                    "place_id": "b",
                    "name": null,
                    "vicinity": null,
                    "types": null,
                    "geometry": { "location": { "lat": 1.0 } }
                },
                {
                    "place_id": null,
                    "types": ["bar", null],
                    "geometry": null
                }
            ]
        }))
        .unwrap();

        let points: Vec<NearbyPoint> = data
            .results
            .unwrap()
            .into_iter()
            .map(NearbyPoint::from)
            .collect();

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].coordinates, Some(Coordinates { lat: 1.0, lng: 2.0 }));
        assert_eq!(points[1].id, "b");
        assert_eq!(points[1].name, "");
        assert_eq!(points[1].categories, "");
        assert_eq!(points[1].coordinates, None);
        assert_eq!(points[2].id, "");
        assert_eq!(points[2].categories, "bar");
    }

    #[test]
    fn vicinity_wins_over_formatted_address() {
        let place = Place {
            vicinity: Some("Short St".into()),
            formatted_address: Some("Short St, Long Town, Country".into()),
            ..Place::default()
        };

        assert_eq!(NearbyPoint::from(place).address.as_deref(), Some("Short St"));
    }
}
