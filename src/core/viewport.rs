//! Compact-layout classification of the viewport.

use std::cell::Cell;
use std::rc::Rc;

use super::ports::{Listener, ViewportPort};

/// Active viewport subscription. Dropping it (or calling
/// [`Subscription::unsubscribe`]) stops all further callbacks.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    listener: Listener,
}

impl Subscription {
    pub fn unsubscribe(self) {
        self.listener.detach();
    }
}

/// Classifies viewport widths against a fixed breakpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportClassifier {
    breakpoint_px: f64,
}

impl ViewportClassifier {
    pub fn new(breakpoint_px: f64) -> Self {
        Self { breakpoint_px }
    }

    /// Whether `width` is the compact layout.
    pub fn is_compact(&self, width: f64) -> bool {
        width < self.breakpoint_px
    }

    /// Emit the current classification now, then again on every boundary
    /// crossing. Resizes that stay on one side of the breakpoint are silent.
    pub fn subscribe<P: ViewportPort>(
        &self,
        port: &P,
        on_change: impl Fn(bool) + 'static,
    ) -> Subscription {
        let initial = self.is_compact(port.width());
        on_change(initial);

        let last = Cell::new(initial);
        let classifier = *self;
        let listener = port.on_resize(Rc::new(move |width| {
            let compact = classifier.is_compact(width);
            if compact != last.get() {
                last.set(compact);
                on_change(compact);
            }
        }));

        Subscription { listener }
    }
}
