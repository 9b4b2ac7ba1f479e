//! One-shot weather fetch for the dashboard card.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Request, RequestInit, Response};

use super::dom;
use crate::weather::display::{CITY_ID, DESC_ID, ICON_ID, TEMP_ID};
use crate::weather::{forecast, outcome, CurrentWeather, WeatherView};

/// Server route proxying the upstream current-weather API
const WEATHER_ROUTE: &str = "/weather";
/// Element carrying the configured city in `data-city`
const SECTION_ID: &str = "weather";

/// GET the report once and write it into the card.
pub async fn load() {
    let Some(document) = dom::document() else {
        return;
    };

    let fetched = fetch_report().await;
    let configured_city = dom::attribute(&document, SECTION_ID, "data-city");
    let settled = outcome(fetched, configured_city);

    render(&document, &settled.view);
    if let Some(city) = settled.forecast_city {
        forecast(&city);
    }
}

fn render(document: &Document, view: &WeatherView) {
    dom::set_text(document, TEMP_ID, &view.temp);
    dom::set_text(document, CITY_ID, &view.city);
    if let Some(desc) = &view.desc {
        dom::set_text(document, DESC_ID, desc);
    }
    if let Some(icon) = &view.icon {
        dom::set_text(document, ICON_ID, icon);
    }
}

async fn fetch_report() -> Result<CurrentWeather, String> {
    let window = web_sys::window().ok_or("No window")?;
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request =
        Request::new_with_str_and_init(WEATHER_ROUTE, &opts).map_err(|e| format!("{:?}", e))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{:?}", e))?;

    let resp: Response = resp_value.dyn_into().map_err(|_| "Not a Response")?;
    if !resp.ok() {
        return Err(format!("HTTP error! status: {}", resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("{:?}", e))?
        .as_string()
        .ok_or("Response body is not text")?;

    serde_json::from_str(&text).map_err(|e| e.to_string())
}
