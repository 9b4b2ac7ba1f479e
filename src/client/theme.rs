//! Theme toggle wiring for the dashboard.
//!
//! The `dark` class on `<html>` is the source of truth for the current theme;
//! `localStorage` only remembers it between visits.

use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Storage, Window};

use super::dom;
use crate::theme::{
    resolve_initial, Theme, DARK_CLASS, PREFERS_DARK_QUERY, STORAGE_KEY, TOGGLE_BUTTON_ID,
    TOGGLE_ICON_ID, TOGGLE_TEXT_ID,
};

fn local_storage(window: &Window) -> Option<Storage> {
    window.local_storage().ok().flatten()
}

fn stored_preference(window: &Window) -> Option<String> {
    local_storage(window)?.get_item(STORAGE_KEY).ok().flatten()
}

fn system_prefers_dark(window: &Window) -> bool {
    window
        .match_media(PREFERS_DARK_QUERY)
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}

fn root_theme(root: &Element) -> Theme {
    Theme::from_dark(root.class_list().contains(DARK_CLASS))
}

fn apply(root: &Element, theme: Theme) {
    let classes = root.class_list();
    let result = if theme.is_dark() {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };
    if let Err(e) = result {
        warn!("Failed to update root class: {:?}", e);
    }
}

fn persist(window: &Window, theme: Theme) {
    match local_storage(window) {
        Some(storage) => {
            if let Err(e) = storage.set_item(STORAGE_KEY, theme.as_str()) {
                warn!("Failed to save theme preference: {:?}", e);
            }
        }
        None => debug!("localStorage unavailable, theme not persisted"),
    }
}

fn update_toggle(document: &Document, theme: Theme) {
    let label = theme.toggle_label();
    dom::set_text(document, TOGGLE_ICON_ID, label.icon);
    dom::set_text(document, TOGGLE_TEXT_ID, label.text);
}

/// Apply the saved (or system) theme and attach the toggle's click handler.
pub fn init() {
    let Some(window) = web_sys::window() else {
        debug!("No window, skipping theme setup");
        return;
    };
    let Some(document) = window.document() else {
        debug!("No document, skipping theme setup");
        return;
    };
    let Some(root) = document.document_element() else {
        debug!("No root element, skipping theme setup");
        return;
    };

    let initial = resolve_initial(
        stored_preference(&window).as_deref(),
        system_prefers_dark(&window),
    );
    apply(&root, initial);
    update_toggle(&document, root_theme(&root));
    debug!("Initial theme: {}", initial.as_str());

    let Some(button) = document.get_element_by_id(TOGGLE_BUTTON_ID) else {
        warn!("#{} not found, theme toggle disabled", TOGGLE_BUTTON_ID);
        return;
    };

    let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let next = root_theme(&root).toggled();
        apply(&root, next);
        persist(&window, next);
        update_toggle(&document, next);
    });

    if let Err(e) =
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
    {
        warn!("Failed to attach theme toggle handler: {:?}", e);
        return;
    }
    // Lives as long as the page
    on_click.forget();
}
