//! Operator-visible logging.
//!
//! Writes to the browser console on `wasm32` and to stderr on native
//! targets so unit tests keep the output.

/// Log an error.
pub fn error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[error] {}", message);
}

/// Log a warning.
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[warn] {}", message);
}

/// Log an informational message.
pub fn info(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::info_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[info] {}", message);
}
