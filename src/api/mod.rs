//! HTTP API handlers

use crate::adapters::openweather::{OpenWeatherAdapter, WeatherError};
use crate::ui;
use crate::weather::CurrentWeather;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub weather: Arc<OpenWeatherAdapter>,
    /// City shown on the dashboard
    pub city: Arc<str>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(weather: OpenWeatherAdapter, city: impl Into<Arc<str>>) -> Self {
        Self {
            weather: Arc::new(weather),
            city: city.into(),
            started_at: Instant::now(),
        }
    }
}

/// Build the application router.
///
/// `assets_dir` holds the wasm-bindgen output and is served under `/pkg`.
pub fn router(state: AppState, assets_dir: &Path) -> Router {
    Router::new()
        // Health check
        .route("/status", get(status_handler))
        // Current conditions for the configured city
        .route("/weather", get(weather_handler))
        // Web UI
        .route("/", get(ui::dashboard_page))
        .nest_service("/pkg", ServeDir::new(assets_dir))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        let status = match &self {
            WeatherError::MissingApiKey => StatusCode::SERVICE_UNAVAILABLE,
            WeatherError::InvalidUrl(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WeatherError::Request(_) | WeatherError::Status { .. } => StatusCode::BAD_GATEWAY,
        };
        let error = match &self {
            WeatherError::Status {
                message: Some(message),
                ..
            } => format!("{}: {}", self, message),
            _ => self.to_string(),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub uptime_secs: u64,
    pub city: String,
    pub weather_configured: bool,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "weather-dash",
        version: env!("WXD_VERSION"),
        git_sha: env!("WXD_GIT_SHA"),
        uptime_secs: state.started_at.elapsed().as_secs(),
        city: state.city.to_string(),
        weather_configured: state.weather.has_api_key(),
    })
}

/// GET /weather - Current conditions for the configured city
pub async fn weather_handler(
    State(state): State<AppState>,
) -> Result<Json<CurrentWeather>, WeatherError> {
    match state.weather.fetch_current(&state.city).await {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            tracing::error!("ERROR fetching weather: {}", e);
            Err(e)
        }
    }
}
