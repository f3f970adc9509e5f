//! Custom hooks for the theme switcher.
//!
//! Each hook wires one core controller to the browser and ties the
//! resulting listeners to the component's lifetime.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::app::SwitcherState;
use crate::config::{COMPACT_BREAKPOINT_PX, COPIED_RESET_MS, style_prompt};
use crate::core::ports::Listener;
use crate::core::{
    ClipboardExporter, DrawerEnv, DrawerResources, GestureDetector, KeyCommand, KeyContext,
    SwipeDirection, ViewportClassifier,
};
use crate::utils::browser::{self, BrowserTimers, NavigatorClipboard, WindowViewport};
use crate::utils::dom;

/// Clipboard exporter bound to the browser clipboard and timers.
pub type BrowserExporter = ClipboardExporter<NavigatorClipboard, BrowserTimers>;

/// Keep `state.compact` in step with the viewport breakpoint.
pub fn use_compact_layout(state: SwitcherState) {
    let subscription = ViewportClassifier::new(COMPACT_BREAKPOINT_PX).subscribe(
        &WindowViewport,
        move |compact| {
            let _ = state.compact.try_set(compact);
        },
    );

    let subscription = StoredValue::new_local(Some(subscription));
    on_cleanup(move || {
        let _ = subscription.try_update_value(|s| s.take().map(|s| s.unsubscribe()));
    });
}

// ============================================================================
// Drawer
// ============================================================================

/// Drawer side effects against the live document.
struct DomDrawerEnv {
    state: SwitcherState,
    root: NodeRef<leptos::html::Div>,
}

impl DrawerEnv for DomDrawerEnv {
    fn attach_dismiss_listeners(&self) -> Listener {
        let state = self.state;
        let root = self.root;
        browser::listen_drawer_dismiss(
            move || root.get_untracked().map(Into::into),
            move |event| state.dispatch(event),
        )
    }

    fn lock_scroll(&self) -> Listener {
        dom::lock_body_scroll()
    }
}

/// Register dismiss listeners and the compact scroll lock only while the
/// drawer is open. `root` is the widget's outermost element; pointer-downs
/// outside it close the drawer.
pub fn use_drawer(state: SwitcherState, root: NodeRef<leptos::html::Div>) {
    let resources = StoredValue::new_local(DrawerResources::new(DomDrawerEnv { state, root }));

    // Runs after the triggering event has finished dispatching, so a
    // listener is never detached from inside its own callback.
    Effect::new(move || {
        let drawer = state.drawer.get();
        let compact = state.compact.get();
        let _ = resources.try_update_value(|r| r.sync(drawer, compact));
    });

    on_cleanup(move || {
        let _ = resources.try_update_value(|r| r.release());
    });
}

// ============================================================================
// Gestures and Keyboard
// ============================================================================

fn first_changed_x(ev: &web_sys::TouchEvent) -> Option<f64> {
    ev.changed_touches().get(0).map(|t| t.client_x() as f64)
}

/// Page-wide horizontal swipe navigation.
pub fn use_swipe_navigation(on_swipe: impl Fn(SwipeDirection) + 'static) {
    let detector = Rc::new(RefCell::new(GestureDetector::default()));

    let start = {
        let detector = detector.clone();
        dom::listen_document("touchstart", move |ev: web_sys::TouchEvent| {
            if let Some(x) = first_changed_x(&ev) {
                detector.borrow_mut().on_start(x, ev.time_stamp());
            }
        })
    };

    let end = {
        let detector = detector.clone();
        dom::listen_document("touchend", move |ev: web_sys::TouchEvent| {
            let Some(x) = first_changed_x(&ev) else {
                return;
            };
            let direction = detector.borrow_mut().on_end(x, ev.time_stamp());
            if let Some(direction) = direction {
                on_swipe(direction);
            }
        })
    };

    let cancel = dom::listen_document("touchcancel", move |_: web_sys::TouchEvent| {
        detector.borrow_mut().cancel();
    });

    let listeners = StoredValue::new_local(vec![start, end, cancel]);
    on_cleanup(move || {
        let _ = listeners.try_update_value(Vec::clear);
    });
}

/// ArrowLeft/ArrowRight theme navigation.
pub fn use_keyboard_navigation(on_command: impl Fn(KeyCommand) + 'static) {
    let listener = dom::listen_document("keydown", move |ev: web_sys::KeyboardEvent| {
        let ctx = KeyContext {
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            alt: ev.alt_key(),
            editing: dom::is_editable_target(ev.target()),
        };
        if let Some(command) = KeyCommand::from_key(&ev.key(), ctx) {
            ev.prevent_default();
            on_command(command);
        }
    });

    let listener = StoredValue::new_local(Some(listener));
    on_cleanup(move || {
        let _ = listener.try_update_value(Option::take);
    });
}

// ============================================================================
// Clipboard
// ============================================================================

/// Clipboard exporter whose acknowledgment drives `state.copied`.
///
/// The pending reset timer is cancelled on unmount.
pub fn use_clipboard_exporter(state: SwitcherState) -> StoredValue<BrowserExporter, LocalStorage> {
    let exporter = ClipboardExporter::new(
        NavigatorClipboard,
        BrowserTimers,
        style_prompt,
        COPIED_RESET_MS,
        move |copied| {
            let _ = state.copied.try_set(copied);
        },
    );

    let exporter = StoredValue::new_local(exporter);
    on_cleanup(move || {
        let _ = exporter.try_with_value(|e| e.cancel_pending());
    });
    exporter
}
