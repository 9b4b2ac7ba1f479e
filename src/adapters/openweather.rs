//! OpenWeatherMap current-weather client
//!
//! Issues a single `GET {base_url}/weather?q=<city>&appid=<key>&units=<units>`
//! per call. There is no retry and no caching: every dashboard load asks the
//! upstream API again.
//!
//! The API key lives only on the server; the browser talks to `/weather`.

use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::config::WeatherConfig;
use crate::weather::CurrentWeather;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("no OpenWeatherMap API key configured")]
    MissingApiKey,
    #[error("invalid weather endpoint: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP error! status: {status}")]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
}

pub struct OpenWeatherAdapter {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    units: String,
}

impl OpenWeatherAdapter {
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone().filter(|k| !k.trim().is_empty()),
            units: config.units.clone(),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Build the current-weather URL for `city`
    pub fn current_weather_url(&self, city: &str) -> Result<Url, WeatherError> {
        let key = self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;
        let mut url = Url::parse(&format!("{}/weather", self.base_url.trim_end_matches('/')))?;
        url.query_pairs_mut()
            .append_pair("q", city)
            .append_pair("appid", key)
            .append_pair("units", &self.units);
        Ok(url)
    }

    /// Fetch current conditions for `city`
    pub async fn fetch_current(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        let url = self.current_weather_url(city)?;
        debug!("Fetching current weather for {}", city);

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            // Upstream error bodies look like {"cod":"401","message":"Invalid API key..."}
            let message = response
                .json::<CurrentWeather>()
                .await
                .ok()
                .and_then(|body| body.message);
            warn!(
                "OpenWeatherMap returned {} for {}: {}",
                status,
                city,
                message.as_deref().unwrap_or("<no message>")
            );
            return Err(WeatherError::Status { status, message });
        }

        let report = response.json::<CurrentWeather>().await?;
        debug!(
            "Weather for {}: {:?} {:?}",
            city,
            report.main.as_ref().map(|m| m.temp),
            report.primary_condition().map(|c| c.icon.as_str())
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>, base_url: &str) -> WeatherConfig {
        WeatherConfig {
            api_key: api_key.map(str::to_string),
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn url_carries_city_key_and_units() {
        let adapter =
            OpenWeatherAdapter::new(&config(Some("abc123"), "https://api.openweathermap.org/data/2.5"))
                .unwrap();
        let url = adapter.current_weather_url("Bengaluru").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.openweathermap.org/data/2.5/weather?q=Bengaluru&appid=abc123&units=metric"
        );
    }

    #[test]
    fn url_encodes_city_and_tolerates_trailing_slash() {
        let adapter = OpenWeatherAdapter::new(&config(Some("k"), "http://127.0.0.1:9/api/")).unwrap();
        let url = adapter.current_weather_url("São Paulo").unwrap();
        assert_eq!(url.path(), "/api/weather");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs[0], ("q".to_string(), "São Paulo".to_string()));
    }

    #[test]
    fn missing_or_blank_key_is_rejected() {
        let adapter = OpenWeatherAdapter::new(&config(None, "http://localhost")).unwrap();
        assert!(!adapter.has_api_key());
        assert!(matches!(
            adapter.current_weather_url("Bengaluru"),
            Err(WeatherError::MissingApiKey)
        ));

        let adapter = OpenWeatherAdapter::new(&config(Some("  "), "http://localhost")).unwrap();
        assert!(!adapter.has_api_key());
    }

    #[test]
    fn bad_base_url_is_reported() {
        let adapter = OpenWeatherAdapter::new(&config(Some("k"), "not a url")).unwrap();
        assert!(matches!(
            adapter.current_weather_url("Bengaluru"),
            Err(WeatherError::InvalidUrl(_))
        ));
    }
}
