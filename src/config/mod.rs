//! Configuration management

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the wasm-bindgen output served under /pkg
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    #[serde(default)]
    pub weather: WeatherConfig,
}

fn default_port() -> u16 {
    8090
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("./pkg")
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_city")]
    pub city: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_units")]
    pub units: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            city: default_city(),
            base_url: default_base_url(),
            units: default_units(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_city() -> String {
    "Bengaluru".to_string()
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Get config directory (XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("WXD_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/weather-dash");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("weather-dash");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config/weather-dash");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("weather-dash");
        }
    }

    // Fallback to current directory
    PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    // WXD_PORT goes through the port precedence below, not the env source
    let env: ::config::Map<String, String> = std::env::vars()
        .filter(|(key, _)| key != "WXD_PORT")
        .collect();

    let mut builder = ::config::Config::builder()
        .set_default("port", i64::from(default_port()))?
        // config.toml / config.json / config.yaml, whichever exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // WXD_ASSETS_DIR, WXD_WEATHER__CITY, WXD_WEATHER__API_KEY, ...
        .add_source(
            ::config::Environment::with_prefix("WXD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(Some(env)),
        );

    // Port precedence: WXD_PORT > PORT > config > default; unparsable values are skipped
    if let Some(port) = env_port("WXD_PORT").or_else(|| env_port("PORT")) {
        builder = builder.set_override("port", i64::from(port))?;
    }

    // The key is usually handed over under its conventional name
    if let Ok(key) = std::env::var("OPENWEATHER_API_KEY") {
        if !key.trim().is_empty() {
            builder = builder.set_override("weather.api_key", key)?;
        }
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}

fn env_port(var: &str) -> Option<u16> {
    let value = std::env::var(var).ok()?;
    match value.parse::<u16>() {
        Ok(port) => Some(port),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a valid port", var, value);
            None
        }
    }
}
