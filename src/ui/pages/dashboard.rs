//! Dashboard page component.
//!
//! The page carries no script of its own; the WASM bundle loaded by the
//! layout applies the stored theme and fills in the weather card.

use dioxus::prelude::*;

use crate::ui::components::{Layout, ThemeToggle, WeatherCard};

#[derive(Props, Clone, PartialEq)]
pub struct DashboardPageProps {
    /// Configured city, shown in the section heading and read back by the client
    pub city: String,
}

/// Dashboard page component.
#[component]
pub fn DashboardPage(props: DashboardPageProps) -> Element {
    rsx! {
        Layout {
            title: "Dashboard".to_string(),

            div { class: "page-header",
                h1 { "Dashboard" }
                ThemeToggle {}
            }

            section { id: "weather", "data-city": "{props.city}",
                hgroup {
                    h2 { "Current Weather" }
                    p { small { "{props.city}" } }
                }
                WeatherCard {}
            }
        }
    }
}
