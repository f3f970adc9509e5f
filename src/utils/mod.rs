//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - Window, document, event listener and scroll-lock helpers
//! - [`browser`] - Browser implementations of the core capability ports
//! - [`console`] - Console logging that compiles away off `wasm32`

pub mod browser;
pub mod console;
pub mod dom;
