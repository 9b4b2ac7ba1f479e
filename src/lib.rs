//! Weather Dash
//!
//! A dashboard page with a persisted light/dark theme toggle and a
//! current-weather card.
//!
//! This library provides:
//! - Theme preference resolution (stored choice, else system preference)
//! - OpenWeatherMap current-weather types, icon mapping and card formatting
//! - (server) An OpenWeatherMap client, configuration, HTTP API and
//!   server-rendered dashboard page
//! - (wasm32) The browser glue that wires the page

pub mod theme;
pub mod weather;

#[cfg(feature = "server")]
pub mod adapters;
#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod client;
