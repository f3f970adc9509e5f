//! Data models for the theme switcher.
//!
//! - [`Theme`], [`ThemeRegistry`] - Ordered registry of visual skins
//! - [`ThemeRoute`] - Hash-based route to a theme path

mod route;
mod theme;

pub use route::ThemeRoute;
pub use theme::{Theme, ThemeRegistry};
