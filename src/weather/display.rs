//! Turning a weather report into the text shown on the dashboard card.

use thiserror::Error;
use tracing::error;

use super::icons::icon_name;
use super::model::CurrentWeather;

/// Placeholder temperature shown when no reading is available
pub const NO_TEMPERATURE: &str = "--°C";

/// Element ids of the four weather nodes
pub const TEMP_ID: &str = "weather-temp";
pub const CITY_ID: &str = "weather-city";
pub const DESC_ID: &str = "weather-desc";
pub const ICON_ID: &str = "weather-icon";

/// Text for the four weather nodes. `None` leaves a node as it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeatherView {
    pub city: String,
    pub temp: String,
    pub desc: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    /// Upstream answered, but `cod` is not the number 200
    #[error("weather data failed to load or is invalid")]
    Unavailable,
    /// `cod` is 200 but the readings or conditions are missing
    #[error("weather report is missing {0}")]
    Malformed(&'static str),
}

/// What the card shows once the fetch settles, and whether the forecast
/// hook runs afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub view: WeatherView,
    /// City to hand to `forecast`; `None` when the forecast is skipped
    pub forecast_city: Option<String>,
}

/// Decide the card contents for a fetch result.
///
/// Transport failures, non-ok responses, unparsable bodies and malformed
/// reports all show `API Error` and skip the forecast. A report whose `cod`
/// is not 200 shows `Data unavailable` but still runs the forecast, for
/// `configured_city` or else the reported name.
pub fn outcome(
    fetched: Result<CurrentWeather, String>,
    configured_city: Option<String>,
) -> Outcome {
    let report = match fetched {
        Ok(report) => report,
        Err(e) => {
            error!("ERROR fetching weather: {}", e);
            return Outcome {
                view: WeatherView::api_error(),
                forecast_city: None,
            };
        }
    };

    let view = match WeatherView::from_report(&report) {
        Ok(view) => view,
        Err(ViewError::Unavailable) => {
            error!("Weather data failed to load or is invalid. {:?}", report);
            WeatherView::unavailable()
        }
        Err(e @ ViewError::Malformed(_)) => {
            error!("ERROR fetching weather: {}", e);
            return Outcome {
                view: WeatherView::api_error(),
                forecast_city: None,
            };
        }
    };

    Outcome {
        view,
        forecast_city: Some(configured_city.or(report.name).unwrap_or_default()),
    }
}

impl WeatherView {
    /// Build the card contents from a successful report.
    pub fn from_report(report: &CurrentWeather) -> Result<Self, ViewError> {
        if !report.is_ok() {
            return Err(ViewError::Unavailable);
        }
        let main = report.main.as_ref().ok_or(ViewError::Malformed("main"))?;
        let condition = report
            .primary_condition()
            .ok_or(ViewError::Malformed("weather"))?;

        Ok(Self {
            city: report.name.clone().unwrap_or_default(),
            temp: format_temperature(main.temp),
            desc: Some(title_case(&condition.description)),
            icon: Some(icon_name(&condition.icon).to_string()),
        })
    }

    /// Shown when the upstream body reports a failure.
    pub fn unavailable() -> Self {
        Self::fallback("Data unavailable")
    }

    /// Shown when the request itself failed.
    pub fn api_error() -> Self {
        Self::fallback("API Error")
    }

    fn fallback(city: &str) -> Self {
        Self {
            city: city.to_string(),
            temp: NO_TEMPERATURE.to_string(),
            desc: None,
            icon: None,
        }
    }
}

/// `27.46` -> `27°C`. Halves round towards positive infinity (`-2.5` -> `-2`).
pub fn format_temperature(celsius: f64) -> String {
    let floor = celsius.floor();
    let rounded = if celsius - floor >= 0.5 { floor + 1.0 } else { floor };
    // `+ 0.0` turns -0 into 0
    format!("{}°C", rounded + 0.0)
}

/// Upper-case the first character of each space-separated word.
///
/// Runs of spaces are kept as they are; the rest of each word is untouched.
pub fn title_case(description: &str) -> String {
    description
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
