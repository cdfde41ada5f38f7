//! The service's single endpoint: `GET /?cep=<8 digits>`.
//!
//! The handler is a linear pipeline: validate the postal code, resolve it
//! to a city, fetch the city's current temperature, convert. The first
//! failing stage short-circuits with its fixed response; underlying error
//! detail goes to the log, never to the client.

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;

use cep_weather_core::{Cep, CepResolver, TemperatureProvider, TemperatureReport};

pub const MSG_INVALID_CEP: &str = "invalid zipcode";
pub const MSG_CEP_NOT_FOUND: &str = "can not find zipcode";

/// Resolver instances shared by all requests. Both are immutable after
/// startup; per-request state never outlives the request.
#[derive(Clone)]
pub struct AppState {
    cep: Arc<dyn CepResolver>,
    weather: Arc<dyn TemperatureProvider>,
}

impl AppState {
    pub fn new(cep: Arc<dyn CepResolver>, weather: Arc<dyn TemperatureProvider>) -> Self {
        Self { cep, weather }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/", get(current_temperature)).with_state(state)
}

async fn current_temperature(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    // A missing `cep` parameter fails validation the same way a malformed
    // one does.
    let raw = params.get("cep").map(String::as_str).unwrap_or_default();
    let Ok(cep) = Cep::try_from(raw) else {
        return (StatusCode::UNPROCESSABLE_ENTITY, MSG_INVALID_CEP).into_response();
    };

    let city = match state.cep.resolve(&cep).await {
        Ok(city) => city,
        Err(err) => {
            // Network errors, bad upstream statuses, decode failures and
            // genuine misses all collapse to one 404 outcome.
            tracing::warn!(cep = %cep, error = %err, "postal-code resolution failed");
            return (StatusCode::NOT_FOUND, MSG_CEP_NOT_FOUND).into_response();
        }
    };

    let temp_c = match state.weather.current_temp_c(&city).await {
        Ok(temp_c) => temp_c,
        Err(err) => {
            tracing::error!(city = %city, error = %err, "weather lookup failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    Json(TemperatureReport::from_celsius(temp_c)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cep_weather_core::{CepError, WeatherError};

    #[derive(Debug)]
    struct StaticCity(&'static str);

    #[async_trait]
    impl CepResolver for StaticCity {
        async fn resolve(&self, _cep: &Cep) -> Result<String, CepError> {
            Ok(self.0.to_string())
        }
    }

    #[derive(Debug)]
    struct CepFails(fn() -> CepError);

    #[async_trait]
    impl CepResolver for CepFails {
        async fn resolve(&self, _cep: &Cep) -> Result<String, CepError> {
            Err((self.0)())
        }
    }

    /// Fails the test if the handler reaches this resolver.
    #[derive(Debug)]
    struct MustNotResolve;

    #[async_trait]
    impl CepResolver for MustNotResolve {
        async fn resolve(&self, cep: &Cep) -> Result<String, CepError> {
            panic!("cep resolver must not be invoked (got {cep})");
        }
    }

    #[derive(Debug)]
    struct FixedTemp(f64);

    #[async_trait]
    impl TemperatureProvider for FixedTemp {
        async fn current_temp_c(&self, _city: &str) -> Result<f64, WeatherError> {
            Ok(self.0)
        }
    }

    #[derive(Debug)]
    struct WeatherDown;

    #[async_trait]
    impl TemperatureProvider for WeatherDown {
        async fn current_temp_c(&self, _city: &str) -> Result<f64, WeatherError> {
            Err(WeatherError::Status(reqwest::StatusCode::BAD_GATEWAY))
        }
    }

    #[derive(Debug)]
    struct MustNotFetch;

    #[async_trait]
    impl TemperatureProvider for MustNotFetch {
        async fn current_temp_c(&self, city: &str) -> Result<f64, WeatherError> {
            panic!("weather provider must not be invoked (got {city})");
        }
    }

    fn state(
        cep: impl CepResolver + 'static,
        weather: impl TemperatureProvider + 'static,
    ) -> AppState {
        AppState::new(Arc::new(cep), Arc::new(weather))
    }

    async fn call(app_state: AppState, params: &[(&str, &str)]) -> (StatusCode, String) {
        let params: HashMap<String, String> =
            params.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();

        let response = current_temperature(State(app_state), Query(params)).await;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body must be readable");

        (status, String::from_utf8(bytes.to_vec()).expect("body must be utf-8"))
    }

    #[tokio::test]
    async fn malformed_cep_is_rejected_without_touching_resolvers() {
        for bad in ["", "123", "123456789", "1234567a", "12345-78"] {
            let (status, body) =
                call(state(MustNotResolve, MustNotFetch), &[("cep", bad)]).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "for {bad:?}");
            assert_eq!(body, MSG_INVALID_CEP);
        }
    }

    #[tokio::test]
    async fn missing_cep_parameter_is_rejected() {
        let (status, body) = call(state(MustNotResolve, MustNotFetch), &[]).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body, MSG_INVALID_CEP);
    }

    #[tokio::test]
    async fn successful_pipeline_reports_three_scales() {
        let (status, body) =
            call(state(StaticCity("Rio de Janeiro"), FixedTemp(30.5)), &[("cep", "12345678")])
                .await;

        assert_eq!(status, StatusCode::OK);
        let report: TemperatureReport =
            serde_json::from_str(&body).expect("body must be a report");
        assert_eq!(report.temp_c, 30.5);
        assert_eq!(report.temp_f, 30.5 * 1.8 + 32.0);
        assert_eq!(report.temp_k, 303.5);
    }

    #[tokio::test]
    async fn cep_not_found_returns_404_and_skips_weather() {
        let (status, body) =
            call(state(CepFails(|| CepError::NotFound), MustNotFetch), &[("cep", "99999999")])
                .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, MSG_CEP_NOT_FOUND);
    }

    #[tokio::test]
    async fn cep_upstream_failures_collapse_to_404() {
        let failures: &[fn() -> CepError] = &[
            || CepError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
            || CepError::Decode(serde_json::from_str::<bool>("nope").unwrap_err()),
        ];

        for failure in failures {
            let (status, body) =
                call(state(CepFails(*failure), MustNotFetch), &[("cep", "12345678")]).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, MSG_CEP_NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn weather_failure_returns_500_with_empty_body() {
        let (status, body) =
            call(state(StaticCity("Curitiba"), WeatherDown), &[("cep", "12345678")]).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.is_empty(), "500 body must be empty, got {body:?}");
    }
}
