use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::error::{invalid_config_error, Error};

pub const DEFAULT_PLACES_API_BASE: &str = "https://maps.googleapis.com";
pub const DEFAULT_EMBED_BASE: &str = "https://www.google.com";

#[derive(Clone, Debug)]
pub struct Config {
    pub google_key: Option<String>,
    pub bind_addr: SocketAddr,
    pub places_api_base: String,
    pub embed_base: String,
    pub provider_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let or_default =
            |var: &str, default: &str| lookup(var).unwrap_or_else(|_| default.to_string());

        let host: IpAddr = or_default("HOST", "0.0.0.0")
            .parse()
            .map_err(|e| invalid_config_error("HOST", e))?;
        let port: u16 = or_default("PORT", "5000")
            .parse()
            .map_err(|e| invalid_config_error("PORT", e))?;
        let timeout_secs: u64 = or_default("PROVIDER_TIMEOUT_SECS", "10")
            .parse()
            .map_err(|e| invalid_config_error("PROVIDER_TIMEOUT_SECS", e))?;

        let google_key = lookup("GOOGLE_MAPS_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Ok(Self {
            google_key,
            bind_addr: SocketAddr::new(host, port),
            places_api_base: trim_base(or_default("GOOGLE_MAPS_API_BASE", DEFAULT_PLACES_API_BASE)),
            embed_base: trim_base(or_default("GOOGLE_MAPS_EMBED_BASE", DEFAULT_EMBED_BASE)),
            provider_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn trim_base(base: String) -> String {
    base.trim_end_matches('/').to_string()
}
