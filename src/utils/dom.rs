//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Show a blocking alert dialog.
///
/// Silently does nothing when no window is available.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// Focus an element by id.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_by_id(id: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.get_element_by_id(id)
        && let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}
