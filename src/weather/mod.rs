//! Current-weather card: upstream response types, icon mapping and the text
//! written into the dashboard.
//!
//! Shared between the server (which fetches the report) and the WASM client
//! (which renders it).

pub mod display;
pub mod icons;
pub mod model;

pub use display::{
    format_temperature, outcome, title_case, Outcome, ViewError, WeatherView, NO_TEMPERATURE,
};
pub use icons::{icon_name, DEFAULT_ICON};
pub use model::{Cod, Condition, CurrentWeather, MainReadings};

/// Forecast hook, called after current conditions are shown.
///
/// Only current conditions are supported; this records the call and does
/// nothing else.
pub fn forecast(city: &str) {
    tracing::info!("Forecast function called for {}.", city);
}
