use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Builds coordinates from query-string values. Returns `None` when either
    /// value is missing, blank, unparseable or outside the valid range.
    pub fn parse(lat: Option<&str>, lng: Option<&str>) -> Option<Self> {
        let lat = lat?.trim().parse::<f64>().ok()?;
        let lng = lng?.trim().parse::<f64>().ok()?;

        Self::from_parts(Some(lat), Some(lng))
    }

    pub fn from_parts(lat: Option<f64>, lng: Option<f64>) -> Option<Self> {
        let coordinates = Self {
            lat: lat?,
            lng: lng?,
        };

        coordinates.is_valid().then_some(coordinates)
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<Coordinates> for String {
    fn from(coordinates: Coordinates) -> Self {
        format!("{},{}", coordinates.lat, coordinates.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_requires_both_values() {
        assert_eq!(
            Coordinates::parse(Some("51.5074"), Some("-0.1278")),
            Some(Coordinates {
                lat: 51.5074,
                lng: -0.1278
            })
        );
        assert_eq!(Coordinates::parse(Some("51.5074"), None), None);
        assert_eq!(Coordinates::parse(None, Some("-0.1278")), None);
        assert_eq!(Coordinates::parse(Some(""), Some("-0.1278")), None);
    }

    #[test]
    fn parse_accepts_zero() {
        assert_eq!(
            Coordinates::parse(Some("0"), Some("0")),
            Some(Coordinates { lat: 0.0, lng: 0.0 })
        );
    }

    #[test]
    fn parse_rejects_out_of_range_and_garbage() {
        assert_eq!(Coordinates::parse(Some("91"), Some("0")), None);
        assert_eq!(Coordinates::parse(Some("0"), Some("-180.5")), None);
        assert_eq!(Coordinates::parse(Some("north"), Some("0")), None);
        assert_eq!(Coordinates::parse(Some("NaN"), Some("0")), None);
    }

    #[test]
    fn location_string_keeps_exact_values() {
        let location: String = Coordinates {
            lat: 43.65107,
            lng: -79.347015,
        }
        .into();

        assert_eq!(location, "43.65107,-79.347015");
    }
}
