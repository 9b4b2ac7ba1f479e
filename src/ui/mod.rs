//! Web UI handlers
//!
//! Pages are Dioxus components rendered to HTML on the server. Interactivity
//! (theme toggle, weather card) comes from the WASM client once it loads.

pub mod components;
pub mod pages;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use dioxus::prelude::*;

use crate::api::AppState;
use pages::DashboardPage;

/// Render the dashboard to a complete HTML document.
pub fn render_dashboard(city: &str) -> String {
    let city = city.to_string();
    let html = dioxus::ssr::render_element(rsx! { DashboardPage { city: city } });
    format!("<!DOCTYPE html>\n<html lang=\"en\">\n{}</html>", html)
}

/// GET / - Dashboard with theme toggle and weather card
pub async fn dashboard_page(State(state): State<AppState>) -> impl IntoResponse {
    Html(render_dashboard(&state.city))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{TOGGLE_BUTTON_ID, TOGGLE_ICON_ID, TOGGLE_TEXT_ID};
    use crate::weather::display::{CITY_ID, DESC_ID, ICON_ID, TEMP_ID};

    #[test]
    fn dashboard_contains_every_node_the_client_writes() {
        let html = render_dashboard("Bengaluru");
        for id in [
            TOGGLE_BUTTON_ID,
            TOGGLE_ICON_ID,
            TOGGLE_TEXT_ID,
            TEMP_ID,
            CITY_ID,
            DESC_ID,
            ICON_ID,
        ] {
            assert!(
                html.contains(&format!("id=\"{}\"", id)),
                "missing #{} in rendered page",
                id
            );
        }
    }

    #[test]
    fn dashboard_starts_with_light_toggle_and_placeholders() {
        let html = render_dashboard("Bengaluru");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Toggle Dark Mode"));
        assert!(html.contains("dark_mode"));
        assert!(html.contains("--°C"));
        assert!(html.contains("thermostat"));
        assert!(html.contains("data-city=\"Bengaluru\""));
    }

    #[test]
    fn dashboard_boots_wasm_bundle() {
        let html = render_dashboard("Bengaluru");
        assert!(html.contains("/pkg/weather_dash.js"));
        assert!(html.contains("type=\"module\""));
    }
}
