//! Mock servers for integration testing
//!
//! These mock servers simulate the upstream services the dashboard talks to,
//! allowing full integration testing without network access or API keys.

pub mod openweather;

pub use openweather::MockOpenWeather;
