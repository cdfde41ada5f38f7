use thiserror::Error;

/// Failures while resolving a postal code to a locality.
///
/// The HTTP surface collapses all of these into one 404 outcome; the
/// variants exist so logs can tell a dead upstream from a genuine miss.
#[derive(Debug, Error)]
pub enum CepError {
    #[error("cep status not ok: {0}")]
    Status(reqwest::StatusCode),

    #[error("can not find zipcode")]
    NotFound,

    #[error("cep request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("cep response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failures while fetching the current temperature for a locality.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather status not ok: {0}")]
    Status(reqwest::StatusCode),

    #[error("weather request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("weather response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
