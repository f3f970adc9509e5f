//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, EventTarget, HtmlElement, Storage, Window};

use crate::core::is_editable_tag;
use crate::core::ports::Listener;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Current viewport width in CSS pixels (0 when unavailable).
pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

// =============================================================================
// Event Listeners
// =============================================================================

/// Add an event listener to `target`. The returned guard removes it.
///
/// The guard must not be dropped from inside the handler itself.
pub fn listen<E>(target: &EventTarget, event: &str, mut handler: impl FnMut(E) + 'static) -> Listener
where
    E: JsCast + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        handler(ev.unchecked_into::<E>());
    });

    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        return Listener::noop();
    }

    let target = target.clone();
    let event = event.to_string();
    Listener::new(move || {
        let _ = target.remove_event_listener_with_callback(&event, closure.as_ref().unchecked_ref());
        drop(closure);
    })
}

/// Add an event listener to the document.
pub fn listen_document<E>(event: &str, handler: impl FnMut(E) + 'static) -> Listener
where
    E: JsCast + 'static,
{
    match document() {
        Some(doc) => listen(doc.unchecked_ref::<EventTarget>(), event, handler),
        None => Listener::noop(),
    }
}

/// Add an event listener to the window.
pub fn listen_window<E>(event: &str, handler: impl FnMut(E) + 'static) -> Listener
where
    E: JsCast + 'static,
{
    match window() {
        Some(win) => listen(win.unchecked_ref::<EventTarget>(), event, handler),
        None => Listener::noop(),
    }
}

/// Whether an event target is a text-entry element.
pub fn is_editable_target(target: Option<EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<HtmlElement>().ok())
        .is_some_and(|el| el.is_content_editable() || is_editable_tag(&el.tag_name()))
}

// =============================================================================
// Scroll Lock
// =============================================================================

/// Suppress document scroll by hiding `body` overflow.
///
/// The guard restores the previous inline value exactly once.
pub fn lock_body_scroll() -> Listener {
    let Some(body) = document().and_then(|d| d.body()) else {
        return Listener::noop();
    };

    let style = body.style();
    let previous = style.get_property_value("overflow").unwrap_or_default();
    if style.set_property("overflow", "hidden").is_err() {
        return Listener::noop();
    }

    Listener::new(move || {
        let _ = if previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &previous)
        };
    })
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (with the '#' prefix, if any).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Set the URL hash (adds to browser history, fires `hashchange`).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}
