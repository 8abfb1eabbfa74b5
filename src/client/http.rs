use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize};
use std::time::Duration;

use super::ServerAPI;
use crate::entities::{Category, Coordinates, NearbyPoint, Panorama};
use crate::error::{communication_error, server_rejected_error, Error};

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
}

#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    #[tracing::instrument(skip(self))]
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        let res = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "request failed");
                communication_error()
            })?;

        let status = res.status();

        if !status.is_success() {
            let message = match res.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => String::new(),
            };
            tracing::warn!(%status, %message, "server rejected request");
            return Err(server_rejected_error(message));
        }

        res.json::<T>().await.map_err(|err| {
            tracing::error!(error = %err, "unexpected response body");
            server_rejected_error(format!("Unexpected response from {}", path))
        })
    }
}

fn location_query(coordinates: Coordinates) -> Vec<(&'static str, String)> {
    vec![
        ("lat", coordinates.lat.to_string()),
        ("lng", coordinates.lng.to_string()),
    ]
}

#[async_trait]
impl ServerAPI for HttpClient {
    async fn teleport(&self) -> Result<Coordinates, Error> {
        self.get("/teleport", &[]).await
    }

    async fn streetview(&self, coordinates: Coordinates) -> Result<Panorama, Error> {
        self.get("/streetview", &location_query(coordinates)).await
    }

    async fn places(
        &self,
        coordinates: Coordinates,
        category: Category,
    ) -> Result<Vec<NearbyPoint>, Error> {
        let mut query = location_query(coordinates);
        query.push(("type", category.as_str().to_string()));

        self.get("/places", &query).await
    }
}
