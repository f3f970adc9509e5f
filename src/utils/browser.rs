//! Browser-backed implementations of the core capability ports.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::dom;
use crate::core::DrawerEvent;
use crate::core::error::{ClipboardError, StorageError};
use crate::core::ports::{
    ClipboardPort, Listener, RouterPort, StoragePort, TimerHandle, TimerPort, ViewportPort,
};
use crate::models::ThemeRoute;

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl StoragePort for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(|_| StorageError::ReadFailed)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed)
    }
}

/// `navigator.clipboard`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavigatorClipboard;

impl ClipboardPort for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = dom::window().ok_or(ClipboardError::Unavailable)?;
        let navigator = window.navigator();

        // Insecure contexts have no `navigator.clipboard`.
        let has_clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .is_ok_and(|v| !v.is_undefined() && !v.is_null());
        if !has_clipboard {
            return Err(ClipboardError::Unavailable);
        }

        JsFuture::from(navigator.clipboard().write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::WriteRejected(format!("{:?}", e)))
    }
}

/// Window width and `resize` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowViewport;

impl ViewportPort for WindowViewport {
    fn width(&self) -> f64 {
        dom::viewport_width()
    }

    fn on_resize(&self, on_resize: Rc<dyn Fn(f64)>) -> Listener {
        dom::listen_window(
            "resize",
            move |_: web_sys::Event| on_resize(dom::viewport_width()),
        )
    }
}

/// Router over the URL hash (`#/midnight`).
#[derive(Clone, Copy, Debug, Default)]
pub struct HashRouter;

impl RouterPort for HashRouter {
    fn current_path(&self) -> String {
        ThemeRoute::from_hash(&dom::get_hash()).path().to_string()
    }

    fn navigate(&self, path: &str) {
        dom::set_hash(&ThemeRoute::from_path(path).to_hash());
    }
}

/// `setTimeout` through `gloo-timers`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimers;

impl TimerPort for BrowserTimers {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let timeout = Timeout::new(delay_ms, callback);
        Listener::new(move || drop(timeout))
    }
}

/// Document-level listeners that dismiss the drawer.
///
/// A `pointerdown` whose target lies outside the element returned by `root`
/// reports [`DrawerEvent::OutsideClick`]; an `Escape` keydown reports
/// [`DrawerEvent::Escape`]. `root` is resolved on every event.
pub fn listen_drawer_dismiss(
    root: impl Fn() -> Option<web_sys::Element> + 'static,
    on_dismiss: impl Fn(DrawerEvent) + 'static,
) -> Listener {
    let on_dismiss = Rc::new(on_dismiss);

    let pointer = {
        let on_dismiss = on_dismiss.clone();
        dom::listen_document("pointerdown", move |ev: web_sys::Event| {
            let inside = match (root(), ev.target()) {
                (Some(el), Some(target)) => el.contains(target.dyn_ref::<web_sys::Node>()),
                _ => false,
            };
            if !inside {
                on_dismiss(DrawerEvent::OutsideClick);
            }
        })
    };

    let escape = dom::listen_document("keydown", move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_dismiss(DrawerEvent::Escape);
        }
    });

    Listener::new(move || {
        pointer.detach();
        escape.detach();
    })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_storage_round_trips_values() {
        let storage = BrowserStorage;
        storage.set("theme-switcher:test", "[\"/midnight\"]").unwrap();
        assert_eq!(
            storage.get("theme-switcher:test").unwrap().as_deref(),
            Some("[\"/midnight\"]")
        );
        assert_eq!(storage.get("theme-switcher:missing").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn scroll_lock_restores_previous_overflow() {
        let body = dom::document().unwrap().body().unwrap();
        body.style().set_property("overflow", "auto").unwrap();

        let lock = dom::lock_body_scroll();
        assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");

        drop(lock);
        assert_eq!(body.style().get_property_value("overflow").unwrap(), "auto");
    }

    #[wasm_bindgen_test]
    fn hash_router_navigates_through_the_hash() {
        HashRouter.navigate("/paper");
        assert_eq!(dom::get_hash(), "#/paper");
        assert_eq!(HashRouter.current_path(), "/paper");
    }

    /// A `<div>` root with one child, attached to the body.
    fn mount_root() -> (web_sys::Element, web_sys::Element) {
        let doc = dom::document().unwrap();
        let root = doc.create_element("div").unwrap();
        let child = doc.create_element("button").unwrap();
        root.append_child(&child).unwrap();
        doc.body().unwrap().append_child(&root).unwrap();
        (root, child)
    }

    fn pointerdown() -> web_sys::Event {
        let init = web_sys::EventInit::new();
        init.set_bubbles(true);
        web_sys::Event::new_with_event_init_dict("pointerdown", &init).unwrap()
    }

    fn keydown(key: &str) -> web_sys::KeyboardEvent {
        let init = web_sys::KeyboardEventInit::new();
        init.set_key(key);
        init.set_bubbles(true);
        web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap()
    }

    fn recording_dismiss(root: &web_sys::Element) -> (Rc<RefCell<Vec<DrawerEvent>>>, Listener) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let root = root.clone();
        let listener = listen_drawer_dismiss(
            move || Some(root.clone()),
            move |event| sink.borrow_mut().push(event),
        );
        (events, listener)
    }

    #[wasm_bindgen_test]
    fn pointerdown_inside_root_keeps_drawer_open() {
        let (root, child) = mount_root();
        let (events, _listener) = recording_dismiss(&root);

        child.dispatch_event(&pointerdown()).unwrap();
        root.dispatch_event(&pointerdown()).unwrap();
        assert!(events.borrow().is_empty());

        root.remove();
    }

    #[wasm_bindgen_test]
    fn pointerdown_outside_root_dismisses() {
        let (root, _child) = mount_root();
        let (events, _listener) = recording_dismiss(&root);

        let body = dom::document().unwrap().body().unwrap();
        body.dispatch_event(&pointerdown()).unwrap();
        assert_eq!(*events.borrow(), vec![DrawerEvent::OutsideClick]);

        root.remove();
    }

    #[wasm_bindgen_test]
    fn only_escape_key_dismisses() {
        let (root, child) = mount_root();
        let (events, _listener) = recording_dismiss(&root);

        child.dispatch_event(&keydown("ArrowLeft")).unwrap();
        child.dispatch_event(&keydown("Enter")).unwrap();
        assert!(events.borrow().is_empty());

        child.dispatch_event(&keydown("Escape")).unwrap();
        assert_eq!(*events.borrow(), vec![DrawerEvent::Escape]);

        root.remove();
    }

    #[wasm_bindgen_test]
    fn detached_dismiss_listeners_stay_silent() {
        let (root, _child) = mount_root();
        let (events, listener) = recording_dismiss(&root);
        listener.detach();

        let body = dom::document().unwrap().body().unwrap();
        body.dispatch_event(&pointerdown()).unwrap();
        body.dispatch_event(&keydown("Escape")).unwrap();
        assert!(events.borrow().is_empty());

        root.remove();
    }
}
