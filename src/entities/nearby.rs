use serde::{Deserialize, Serialize};

use super::Coordinates;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "WirePoint", into = "WirePoint")]
pub struct NearbyPoint {
    pub id: String,
    pub name: String,
    pub distance: Option<f64>,
    pub address: Option<String>,
    pub categories: String,
    pub coordinates: Option<Coordinates>,
}

/// JSON shape of a nearby point: coordinates are flattened into `lat`/`lng`.
#[derive(Serialize, Deserialize)]
struct WirePoint {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    distance: Option<f64>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    categories: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lng: Option<f64>,
}

impl From<WirePoint> for NearbyPoint {
    fn from(wire: WirePoint) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            distance: wire.distance,
            address: wire.address,
            categories: wire.categories,
            coordinates: Coordinates::from_parts(wire.lat, wire.lng),
        }
    }
}

impl From<NearbyPoint> for WirePoint {
    fn from(point: NearbyPoint) -> Self {
        Self {
            id: point.id,
            name: point.name,
            distance: point.distance,
            address: point.address,
            categories: point.categories,
            lat: point.coordinates.map(|c| c.lat),
            lng: point.coordinates.map(|c| c.lng),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    Cafe,
    Bar,
}

/// Requested category names the provider search understands. Anything not
/// listed here falls back to `Category::default()`.
const CATEGORY_TABLE: &[(&str, Category)] = &[("cafe", Category::Cafe), ("bar", Category::Bar)];

impl Category {
    pub fn from_query(value: Option<&str>) -> Self {
        let value = value.map(|v| v.trim().to_lowercase()).unwrap_or_default();

        CATEGORY_TABLE
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, category)| *category)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cafe => "cafe",
            Category::Bar => "bar",
        }
    }

    pub fn provider_type(&self) -> &'static str {
        self.as_str()
    }
}

pub fn fallback_points(coordinates: Coordinates) -> Vec<NearbyPoint> {
    vec![
        NearbyPoint {
            id: "fallback-1".into(),
            name: "Sample Café".into(),
            distance: Some(200.0),
            address: Some("123 Example Street".into()),
            categories: "cafe".into(),
            coordinates: Some(coordinates),
        },
        NearbyPoint {
            id: "fallback-2".into(),
            name: "Neighbourhood Coffee".into(),
            distance: Some(450.0),
            address: Some("456 Demo Avenue".into()),
            categories: "coffee_shop".into(),
            coordinates: Some(coordinates),
        },
    ]
}
