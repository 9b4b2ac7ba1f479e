//! Upstream service adapters

pub mod openweather;
