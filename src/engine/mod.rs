mod nearby_api;
mod panorama_api;
mod teleport_api;

use crate::{
    api::API,
    config::Config,
    error::{missing_credential_error, Error},
    external::google_maps::GoogleMaps,
};

#[derive(Debug)]
pub struct Engine {
    credential: Option<String>,
    maps: GoogleMaps,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(config: &Config) -> Result<Self, Error> {
        if config.google_key.is_none() {
            tracing::warn!("GOOGLE_MAPS_API_KEY is not set; /streetview and /places will fail");
        }

        let maps = GoogleMaps::new(
            config.places_api_base.clone(),
            config.embed_base.clone(),
            config.provider_timeout,
        )?;

        Ok(Self {
            credential: config.google_key.clone(),
            maps,
        })
    }

    fn credential(&self) -> Result<&str, Error> {
        self.credential
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                tracing::error!("missing provider credential");
                missing_credential_error()
            })
    }
}

impl API for Engine {}

#[cfg(test)]
pub(crate) fn test_engine(key: Option<&str>, places_api_base: &str) -> Engine {
    use std::time::Duration;

    let config = Config {
        google_key: key.map(String::from),
        bind_addr: ([127, 0, 0, 1], 0).into(),
        places_api_base: places_api_base.into(),
        embed_base: crate::config::DEFAULT_EMBED_BASE.into(),
        provider_timeout: Duration::from_millis(500),
    };

    Engine::new(&config).unwrap()
}
