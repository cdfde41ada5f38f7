//! Postal-code resolution via a ViaCEP-style lookup API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt::Debug;

use crate::error::CepError;
use crate::model::Cep;

/// Resolves a validated postal code to a locality (city) name.
#[async_trait]
pub trait CepResolver: Send + Sync + Debug {
    async fn resolve(&self, cep: &Cep) -> Result<String, CepError>;
}

/// Client for the ViaCEP lookup endpoint: `GET {base_url}/{cep}/json/`.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    base_url: String,
    http: Client,
}

impl ViaCepClient {
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        Self { base_url: base_url.into(), http }
    }
}

/// Both fields are optional in practice; a missing `localidade` is treated
/// the same as an empty one.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    erro: bool,
}

#[async_trait]
impl CepResolver for ViaCepClient {
    async fn resolve(&self, cep: &Cep) -> Result<String, CepError> {
        let url = format!("{}/{}/json/", self.base_url, cep);

        let res = self.http.get(&url).send().await?;

        let status = res.status();
        if status != StatusCode::OK {
            return Err(CepError::Status(status));
        }

        let body = res.text().await?;
        let parsed: ViaCepResponse = serde_json::from_str(&body)?;

        if parsed.erro || parsed.localidade.is_empty() {
            return Err(CepError::NotFound);
        }

        tracing::debug!(cep = %cep, city = %parsed.localidade, "resolved postal code");
        Ok(parsed.localidade)
    }
}
