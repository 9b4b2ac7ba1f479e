//! OpenWeatherMap current-weather response types.
//!
//! Only the fields the dashboard reads are modelled; everything else in the
//! upstream body is ignored. Every field is optional so that error bodies
//! (`{"cod":"404","message":"city not found"}`) parse too.

use serde::{Deserialize, Serialize};

/// The `cod` field: a number on success, a string on most upstream errors
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Cod {
    Number(i64),
    /// `200.0` and friends; JSON does not distinguish them from integers
    Float(f64),
    Text(String),
}

impl Cod {
    /// Numerically 200; `"200"` as a string does not count.
    pub fn is_ok(&self) -> bool {
        match self {
            Cod::Number(n) => *n == 200,
            Cod::Float(f) => *f == 200.0,
            Cod::Text(_) => false,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CurrentWeather {
    #[serde(default)]
    pub cod: Option<Cod>,
    /// City name as resolved by the upstream API
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub main: Option<MainReadings>,
    #[serde(default)]
    pub weather: Vec<Condition>,
    /// Observation time (unix seconds)
    #[serde(default)]
    pub dt: Option<i64>,
    /// Upstream error message, present alongside a non-200 `cod`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CurrentWeather {
    pub fn is_ok(&self) -> bool {
        self.cod.as_ref().is_some_and(Cod::is_ok)
    }

    /// First reported condition (the one the dashboard shows)
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct MainReadings {
    /// Temperature in the requested units (metric: °C)
    pub temp: f64,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub humidity: Option<u8>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Condition {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub main: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Icon code such as `01d` or `10n`
    #[serde(default)]
    pub icon: String,
}
