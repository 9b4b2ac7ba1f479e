//! Light/dark toggle button.
//!
//! Rendered in the light state; the WASM client corrects icon and caption
//! as soon as it has read the stored preference.

use dioxus::prelude::*;

use crate::theme::{Theme, TOGGLE_BUTTON_ID, TOGGLE_ICON_ID, TOGGLE_TEXT_ID};

#[component]
pub fn ThemeToggle() -> Element {
    let label = Theme::default().toggle_label();

    rsx! {
        button {
            id: TOGGLE_BUTTON_ID,
            class: "theme-toggle",
            r#type: "button",
            span { id: TOGGLE_ICON_ID, class: "material-symbols-outlined", "{label.icon}" }
            span { id: TOGGLE_TEXT_ID, "{label.text}" }
        }
    }
}
