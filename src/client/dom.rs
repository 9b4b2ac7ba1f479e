//! Small DOM helpers shared by the theme and weather glue.

use web_sys::Document;

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Replace the text of `#id`. A missing element is logged and skipped.
pub fn set_text(document: &Document, id: &str, text: &str) {
    match document.get_element_by_id(id) {
        Some(el) => el.set_text_content(Some(text)),
        None => tracing::warn!("#{} not found, cannot set text", id),
    }
}

/// Read an attribute of `#id`
pub fn attribute(document: &Document, id: &str, name: &str) -> Option<String> {
    document.get_element_by_id(id)?.get_attribute(name)
}
