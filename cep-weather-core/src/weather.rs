//! Current temperature via a WeatherAPI.com-style endpoint.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt::Debug;

use crate::error::WeatherError;

/// Fetches the current temperature in Celsius for a locality name.
#[async_trait]
pub trait TemperatureProvider: Send + Sync + Debug {
    async fn current_temp_c(&self, city: &str) -> Result<f64, WeatherError>;
}

/// Client for the weather endpoint:
/// `GET {base_url}/current.json?key={api_key}&q={city}`.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, http: Client) -> Self {
        Self { base_url: base_url.into(), api_key: api_key.into(), http }
    }
}

// The upstream payload is much larger; only `current.temp_c` is read, and a
// missing field decodes to zero rather than erroring.
#[derive(Debug, Deserialize)]
struct WaResponse {
    #[serde(default)]
    current: WaCurrent,
}

#[derive(Debug, Default, Deserialize)]
struct WaCurrent {
    #[serde(default)]
    temp_c: f64,
}

#[async_trait]
impl TemperatureProvider for WeatherApiClient {
    async fn current_temp_c(&self, city: &str) -> Result<f64, WeatherError> {
        let url = format!("{}/current.json", self.base_url);

        // `.query` percent-encodes the city name.
        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", city)])
            .send()
            .await?;

        let status = res.status();
        if status != StatusCode::OK {
            return Err(WeatherError::Status(status));
        }

        let body = res.text().await?;
        let parsed: WaResponse = serde_json::from_str(&body)?;

        Ok(parsed.current.temp_c)
    }
}
