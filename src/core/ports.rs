//! Capability interfaces over the ambient browser APIs.
//!
//! The state machines in [`crate::core`] only talk to the browser through these
//! traits. Browser-backed implementations live in [`crate::utils::browser`];
//! tests supply in-memory fakes.

use std::future::Future;
use std::rc::Rc;

use super::error::{ClipboardError, StorageError};

// =============================================================================
// Listener
// =============================================================================

/// Guard for a registered callback (event listener, timer, scroll lock).
///
/// The detach action runs exactly once: either through [`Listener::detach`]
/// or when the guard is dropped.
#[must_use = "dropping a Listener detaches it immediately"]
pub struct Listener {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Listener {
    /// Wrap a detach action.
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// A guard with nothing to detach.
    pub fn noop() -> Self {
        Self { detach: None }
    }

    /// Detach now.
    pub fn detach(mut self) {
        self.run_detach();
    }

    fn run_detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.run_detach();
    }
}

/// Cancellable handle for a scheduled timer. Dropping it cancels the timer.
pub type TimerHandle = Listener;

// =============================================================================
// Ports
// =============================================================================

/// Durable key/value string storage (localStorage).
pub trait StoragePort {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// System clipboard.
pub trait ClipboardPort {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}

/// Viewport width source.
pub trait ViewportPort {
    /// Current viewport width in CSS pixels.
    fn width(&self) -> f64;

    /// Invoke `on_resize` with the new width whenever the viewport changes size.
    fn on_resize(&self, on_resize: Rc<dyn Fn(f64)>) -> Listener;
}

/// External router capability. The widget requests navigation but never
/// performs it itself.
pub trait RouterPort {
    fn current_path(&self) -> String;
    fn navigate(&self, path: &str);
}

/// One-shot timer scheduling.
pub trait TimerPort {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle;
}

impl<T: StoragePort + ?Sized> StoragePort for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<T: RouterPort + ?Sized> RouterPort for Rc<T> {
    fn current_path(&self) -> String {
        (**self).current_path()
    }

    fn navigate(&self, path: &str) {
        (**self).navigate(path)
    }
}
