use anyhow::{Context, Result};
use std::time::Duration;

pub const DEFAULT_CEP_BASE_URL: &str = "https://viacep.com.br/ws";
pub const DEFAULT_WEATHER_BASE_URL: &str = "http://api.weatherapi.com/v1";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Process configuration, read from the environment once at startup and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the postal-code lookup service.
    pub cep_base_url: String,

    /// Base URL of the weather service.
    pub weather_base_url: String,

    /// API key forwarded to the weather service as a query parameter.
    /// May be empty; the weather API will then reject calls per request.
    pub weather_api_key: String,

    /// Listening port for the HTTP server.
    pub port: u16,

    /// Timeout applied uniformly to both outbound calls by the shared client.
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cep_base_url: DEFAULT_CEP_BASE_URL.to_string(),
            weather_base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            weather_api_key: String::new(),
            port: DEFAULT_PORT,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// Unset or empty variables fall back to the defaults above; numeric
    /// variables that are set but unparsable are a startup error.
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();

        if let Some(v) = env_nonempty("CEP_BASE_URL") {
            cfg.cep_base_url = v;
        }
        if let Some(v) = env_nonempty("WEATHER_BASE_URL") {
            cfg.weather_base_url = v;
        }
        if let Some(v) = env_nonempty("WEATHERAPI_KEY") {
            cfg.weather_api_key = v;
        }
        if let Some(v) = env_nonempty("PORT") {
            cfg.port = v.parse().with_context(|| format!("Invalid PORT value: {v}"))?;
        }
        if let Some(v) = env_nonempty("HTTP_TIMEOUT_SECS") {
            let secs: u64 =
                v.parse().with_context(|| format!("Invalid HTTP_TIMEOUT_SECS value: {v}"))?;
            cfg.http_timeout = Duration::from_secs(secs);
        }

        Ok(cfg)
    }

    /// Build the HTTP client shared by both resolvers.
    ///
    /// One client, one fixed timeout; the client is cheap to clone and safe
    /// for concurrent reuse.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.http_timeout)
            .build()
            .context("Failed to build shared HTTP client")
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
