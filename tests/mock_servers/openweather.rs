#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Mock OpenWeatherMap for testing
//!
//! Simulates `GET /data/2.5/weather?q=<city>&appid=<key>&units=<units>`,
//! including the upstream error bodies for a bad key and an unknown city.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

pub const VALID_KEY: &str = "test-key";

/// Mock city conditions
#[derive(Debug, Clone)]
pub struct MockCity {
    pub temp: f64,
    pub description: String,
    pub icon: String,
}

struct MockState {
    cities: HashMap<String, MockCity>,
    /// When set, every request answers with this status and an error body
    forced_status: Option<StatusCode>,
    /// Query strings of every request received, in order
    requests: Vec<HashMap<String, String>>,
}

/// Mock OpenWeatherMap server
pub struct MockOpenWeather {
    addr: SocketAddr,
    state: Arc<RwLock<MockState>>,
    handle: JoinHandle<()>,
}

impl MockOpenWeather {
    /// Start a mock server on a random port
    pub async fn start() -> Self {
        let state = Arc::new(RwLock::new(MockState {
            cities: HashMap::new(),
            forced_status: None,
            requests: Vec::new(),
        }));

        let app = Router::new()
            .route("/data/2.5/weather", get(handle_weather))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    /// Base URL to configure the adapter with
    pub fn base_url(&self) -> String {
        format!("http://{}/data/2.5", self.addr)
    }

    pub async fn add_city(&self, name: &str, temp: f64, description: &str, icon: &str) {
        let mut state = self.state.write().await;
        state.cities.insert(
            name.to_string(),
            MockCity {
                temp,
                description: description.to_string(),
                icon: icon.to_string(),
            },
        );
    }

    /// Make every subsequent request fail with `status`
    pub async fn fail_with(&self, status: StatusCode) {
        self.state.write().await.forced_status = Some(status);
    }

    pub async fn requests(&self) -> Vec<HashMap<String, String>> {
        self.state.read().await.requests.clone()
    }

    /// Stop the mock server
    pub async fn stop(self) {
        self.handle.abort();
    }
}

async fn handle_weather(
    State(state): State<Arc<RwLock<MockState>>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    state.requests.push(params.clone());

    if let Some(status) = state.forced_status {
        return (
            status,
            Json(json!({"cod": status.as_u16().to_string(), "message": "internal error"})),
        );
    }

    if params.get("appid").map(String::as_str) != Some(VALID_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "cod": 401,
                "message": "Invalid API key. Please see https://openweathermap.org/faq#error401 for more info."
            })),
        );
    }

    let city = params.get("q").cloned().unwrap_or_default();
    match state.cities.get(&city) {
        Some(c) => (StatusCode::OK, Json(success_body(&city, c))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"cod": "404", "message": "city not found"})),
        ),
    }
}

fn success_body(name: &str, city: &MockCity) -> Value {
    json!({
        "coord": {"lon": 77.6033, "lat": 12.9762},
        "weather": [{
            "id": 802,
            "main": "Clouds",
            "description": city.description,
            "icon": city.icon
        }],
        "base": "stations",
        "main": {
            "temp": city.temp,
            "feels_like": city.temp + 0.6,
            "pressure": 1013,
            "humidity": 58
        },
        "dt": 1_729_330_000,
        "timezone": 19800,
        "name": name,
        "cod": 200
    })
}
