#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use wander::api::DynAPI;
use wander::config::{Config, DEFAULT_EMBED_BASE};
use wander::engine::Engine;
use wander::server;

pub const TEST_KEY: &str = "test-key";
pub const NEARBY_PATH: &str = "/maps/api/place/nearbysearch/json";

/// Serves the app on an ephemeral port and returns its base URL.
pub async fn spawn_app(key: Option<&str>, places_api_base: &str) -> String {
    let config = Config {
        google_key: key.map(String::from),
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        places_api_base: places_api_base.to_string(),
        embed_base: DEFAULT_EMBED_BASE.to_string(),
        provider_timeout: Duration::from_millis(500),
    };

    let api = Arc::new(Engine::new(&config).expect("engine")) as DynAPI;
    let server = axum::Server::bind(&config.bind_addr).serve(server::app(api).into_make_service());
    let addr = server.local_addr();

    tokio::spawn(server);

    format!("http://{}", addr)
}

/// Provider nearby-search body with one result per `(id, name, lat, lng)`.
pub fn nearby_body(places: &[(&str, &str, f64, f64)]) -> Value {
    let results: Vec<Value> = places
        .iter()
        .map(|(id, name, lat, lng)| {
            json!({
                "place_id": id,
                "name": name,
                "vicinity": format!("{} street", name),
                "types": ["cafe", "food"],
                "geometry": { "location": { "lat": lat, "lng": lng } }
            })
        })
        .collect();

    let status = if results.is_empty() { "ZERO_RESULTS" } else { "OK" };

    json!({ "status": status, "results": results })
}

pub fn fallback_json(lat: f64, lng: f64) -> Value {
    json!([
        {
            "id": "fallback-1",
            "name": "Sample Café",
            "distance": 200.0,
            "address": "123 Example Street",
            "categories": "cafe",
            "lat": lat,
            "lng": lng,
        },
        {
            "id": "fallback-2",
            "name": "Neighbourhood Coffee",
            "distance": 450.0,
            "address": "456 Demo Avenue",
            "categories": "coffee_shop",
            "lat": lat,
            "lng": lng,
        }
    ])
}
