//! Layout component wrapping the page with its stylesheet and the WASM bootstrap.

use dioxus::prelude::*;

/// Loads the wasm-bindgen bundle; its start function wires the page.
const BOOTSTRAP_SCRIPT: &str = r#"
import init from '/pkg/weather_dash.js';
init();
"#;

/// Palette for both themes. `html.dark` switches to the dark variables.
const CUSTOM_STYLES: &str = r#"
:root {
    --bg: #f5f7fb;
    --card: #ffffff;
    --text: #1f2933;
    --muted: #616e7c;
    --accent: #2563eb;
    --border: #e4e7eb;
}
html.dark {
    --bg: #0f172a;
    --card: #1e293b;
    --text: #e2e8f0;
    --muted: #94a3b8;
    --accent: #60a5fa;
    --border: #334155;
}
body {
    margin: 0;
    font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    transition: background 0.2s, color 0.2s;
}
main, footer { max-width: 48rem; margin: 0 auto; padding: 1rem; }
.page-header { display: flex; justify-content: space-between; align-items: center; }
small { color: var(--muted); }
.material-symbols-outlined { vertical-align: middle; }
.theme-toggle {
    display: inline-flex; gap: 0.5rem; align-items: center;
    padding: 0.4rem 0.8rem; border-radius: 0.5rem;
    border: 1px solid var(--border); background: var(--card); color: var(--text);
    cursor: pointer;
}
.weather-card {
    display: flex; gap: 1rem; align-items: center;
    padding: 1.25rem; border-radius: 0.75rem;
    background: var(--card); border: 1px solid var(--border);
}
.weather-card .weather-icon { font-size: 3rem; color: var(--accent); }
.weather-card .weather-temp { font-size: 2rem; font-weight: 600; }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("WXD_VERSION");

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{props.title} - Weather Dash" }
            link {
                rel: "stylesheet",
                href: "https://fonts.googleapis.com/css2?family=Material+Symbols+Outlined"
            }
            style { {CUSTOM_STYLES} }
        }
        body {
            main {
                {props.children}
            }
            footer {
                small { "Weather Dash v{version}" }
            }
            script { r#type: "module", dangerous_inner_html: BOOTSTRAP_SCRIPT }
        }
    }
}
