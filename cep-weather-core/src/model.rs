use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Rejection for strings that are not an 8-digit postal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid zipcode")]
pub struct InvalidCep;

/// A validated 8-digit postal code.
///
/// Construction goes through [`TryFrom`]/[`FromStr`], so a `Cep` held by a
/// caller is always exactly eight ASCII digits. No network call happens
/// before validation succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cep(String);

impl Cep {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Cep {
    type Error = InvalidCep;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.len() == 8 && value.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Cep(value.to_owned()))
        } else {
            Err(InvalidCep)
        }
    }
}

impl FromStr for Cep {
    type Err = InvalidCep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cep::try_from(s)
    }
}

/// A temperature reading in the three scales the service reports.
///
/// Serializes to exactly `{"temp_C": .., "temp_F": .., "temp_K": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReport {
    #[serde(rename = "temp_C")]
    pub temp_c: f64,
    #[serde(rename = "temp_F")]
    pub temp_f: f64,
    #[serde(rename = "temp_K")]
    pub temp_k: f64,
}

impl TemperatureReport {
    /// Derive all three scales from a Celsius reading.
    pub fn from_celsius(temp_c: f64) -> Self {
        Self {
            temp_c,
            temp_f: temp_c * 1.8 + 32.0,
            // Offset of 273 is the published contract, not 273.15.
            temp_k: temp_c + 273.0,
        }
    }
}
