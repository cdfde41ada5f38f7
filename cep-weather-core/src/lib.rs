//! Core library for the `cep-weather` service.
//!
//! This crate defines:
//! - Configuration handling (environment-driven, immutable after startup)
//! - The postal-code and weather resolvers and their trait seams
//! - Shared domain models (validated postal codes, temperature reports)
//!
//! It is used by `cep-weather-server`, but can also be reused by other binaries or services.

pub mod cep;
pub mod config;
pub mod error;
pub mod model;
pub mod weather;

pub use cep::{CepResolver, ViaCepClient};
pub use config::Config;
pub use error::{CepError, WeatherError};
pub use model::{Cep, InvalidCep, TemperatureReport};
pub use weather::{TemperatureProvider, WeatherApiClient};
