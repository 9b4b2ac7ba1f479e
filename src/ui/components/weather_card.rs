//! Current-weather card with the four nodes the WASM client fills in.

use dioxus::prelude::*;

use crate::weather::display::{CITY_ID, DESC_ID, ICON_ID, TEMP_ID};
use crate::weather::{DEFAULT_ICON, NO_TEMPERATURE};

#[component]
pub fn WeatherCard() -> Element {
    rsx! {
        section { class: "weather-card", aria_live: "polite",
            span { id: ICON_ID, class: "material-symbols-outlined weather-icon", "{DEFAULT_ICON}" }
            div {
                div { id: TEMP_ID, class: "weather-temp", "{NO_TEMPERATURE}" }
                div { id: CITY_ID, class: "weather-city", "Loading..." }
                small { id: DESC_ID, class: "weather-desc" }
            }
        }
    }
}
