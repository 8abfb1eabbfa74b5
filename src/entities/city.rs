use rand::Rng;
use serde::Serialize;

use super::Coordinates;
use crate::error::{empty_input_error, not_found_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CityPreset {
    pub key: &'static str,
    pub label: &'static str,
    pub coordinates: Coordinates,
}

const fn preset(key: &'static str, label: &'static str, lat: f64, lng: f64) -> CityPreset {
    CityPreset {
        key,
        label,
        coordinates: Coordinates { lat, lng },
    }
}

pub const PRESETS: [CityPreset; 6] = [
    preset("london", "London, UK", 51.5074, -0.1278),
    preset("paris", "Paris, France", 48.8566, 2.3522),
    preset("toronto", "Toronto, Canada", 43.65107, -79.347015),
    preset("new york", "New York, USA", 40.7128, -74.006),
    preset("tokyo", "Tokyo, Japan", 35.6762, 139.6503),
    preset("rome", "Rome, Italy", 41.9028, 12.4964),
];

pub fn random_coordinates() -> Coordinates {
    let index = rand::thread_rng().gen_range(0..PRESETS.len());

    PRESETS[index].coordinates
}

#[tracing::instrument]
pub fn lookup_city(name: &str) -> Result<&'static CityPreset, Error> {
    let term = name.trim().to_lowercase();

    if term.is_empty() {
        return Err(empty_input_error());
    }

    PRESETS
        .iter()
        .find(|preset| preset.key == term)
        .ok_or_else(|| not_found_error(city_hint()))
}

/// "City not found. Try: London, Paris, Toronto, New York, Tokyo, or Rome."
pub fn city_hint() -> String {
    let names: Vec<&str> = PRESETS
        .iter()
        .map(|preset| preset.label.split(',').next().unwrap_or(preset.label))
        .collect();

    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => {
            format!("City not found. Try: {}, or {}.", rest.join(", "), last)
        }
        _ => format!("City not found. Try: {}.", names.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EMPTY_INPUT, NOT_FOUND};
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn lookup_ignores_case_and_surrounding_whitespace() {
        let plain = assert_ok!(lookup_city("paris"));

        for input in ["Paris", "PARIS", "  paris ", "\tpArIs\n"] {
            assert_eq!(assert_ok!(lookup_city(input)), plain);
        }

        assert_eq!(plain.label, "Paris, France");
    }

    #[test]
    fn lookup_matches_multi_word_names() {
        let preset = assert_ok!(lookup_city(" New York "));
        assert_eq!(
            preset.coordinates,
            Coordinates {
                lat: 40.7128,
                lng: -74.006
            }
        );
    }

    #[test]
    fn blank_input_is_empty_not_missing() {
        assert_eq!(assert_err!(lookup_city("")).code, EMPTY_INPUT);
        assert_eq!(assert_err!(lookup_city("   ")).code, EMPTY_INPUT);
    }

    #[test]
    fn unknown_city_carries_hint() {
        let err = assert_err!(lookup_city("Atlantis"));

        assert_eq!(err.code, NOT_FOUND);
        assert_eq!(
            err.message,
            "City not found. Try: London, Paris, Toronto, New York, Tokyo, or Rome."
        );
    }

    #[test]
    fn random_pick_is_a_preset() {
        for _ in 0..50 {
            let coordinates = random_coordinates();
            assert!(PRESETS.iter().any(|p| p.coordinates == coordinates));
        }
    }
}
