//! Binary crate for the `cep-weather` HTTP service.
//!
//! This crate focuses on:
//! - Process startup (env loading, tracing)
//! - Wiring the configured resolvers into the request handler
//! - Binding the listener and serving

use std::sync::Arc;

use anyhow::Context;
use cep_weather_core::{Config, ViaCepClient, WeatherApiClient};
use cep_weather_server::{AppState, router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    if config.weather_api_key.is_empty() {
        tracing::warn!("WEATHERAPI_KEY is empty; weather lookups will be rejected upstream");
    }

    let http = config.http_client()?;
    let cep = ViaCepClient::new(config.cep_base_url.clone(), http.clone());
    let weather =
        WeatherApiClient::new(config.weather_base_url.clone(), config.weather_api_key.clone(), http);

    let app = router(AppState::new(Arc::new(cep), Arc::new(weather)));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    tracing::info!("listening on http://0.0.0.0:{}", config.port);

    axum::serve(listener, app).await.context("Server exited with an error")?;

    Ok(())
}
