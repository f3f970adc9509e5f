//! Browser console logging.
//!
//! Thin wrappers over `web_sys::console`. Off `wasm32` (native unit tests)
//! the calls are no-ops.

/// Log a warning to the browser console.
#[allow(unused_variables)]
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&format!("[theme-switcher] {}", message).into());
}

/// Log a debug message to the browser console.
#[allow(unused_variables)]
pub fn debug(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(&format!("[theme-switcher] {}", message).into());
}
