//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing (main entry point)
//! - [`page`] - Stand-in page for the active theme
//! - [`switcher`] - Global theme switcher widget
//! - [`icons`] - Centralized icon definitions (change icon set here)

pub mod icons;
pub mod page;
pub mod router;
pub mod switcher;

pub use router::AppRouter;
