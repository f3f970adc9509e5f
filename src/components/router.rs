//! Application router component.
//!
//! Handles URL-based routing with hash history (`#/midnight`).
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the displayed theme is derived from `#/path`
//! - **Switcher never re-renders on navigation**: it is mounted once, beside the page
//! - **hashchange events**: Browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::page::ThemePage;
use crate::components::switcher::ThemeSwitcher;

/// Main application router.
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use crate::models::ThemeRoute;
        use crate::utils::dom;
        use wasm_bindgen::JsCast;

        let route = ctx.route;
        let closure = Closure::wrap(Box::new(move || {
            route.set(ThemeRoute::from_hash(&dom::get_hash()));
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let registry = ctx.registry.get_value();
    let theme = Memo::new(move |_| ctx.route.with(|r| registry.current(r.path()).clone()));

    view! {
        <ThemePage theme=theme />
        <ThemeSwitcher />
    }
}
