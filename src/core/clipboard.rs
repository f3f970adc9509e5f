//! Style prompt export to the system clipboard.
//!
//! A successful copy raises a transient "copied" flag that clears itself
//! after a fixed delay. A newer copy cancels the older reset timer, so the
//! flag is only lowered by the most recent acknowledgment.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::ports::{ClipboardPort, TimerHandle, TimerPort};
use crate::utils::console;

/// Style prompt lookup: theme name to prompt text.
pub type PromptLookup = fn(&str) -> Option<&'static str>;

struct Inner<C, T> {
    clipboard: C,
    timers: T,
    lookup: PromptLookup,
    reset_ms: u32,
    copied: Cell<bool>,
    pending_reset: RefCell<Option<TimerHandle>>,
    on_change: Box<dyn Fn(bool)>,
}

impl<C, T> Inner<C, T> {
    fn set_copied(&self, copied: bool) {
        if self.copied.replace(copied) != copied {
            (self.on_change)(copied);
        }
    }
}

/// Copies a theme's style prompt and manages the "copied" acknowledgment.
pub struct ClipboardExporter<C, T> {
    inner: Rc<Inner<C, T>>,
}

impl<C, T> Clone for ClipboardExporter<C, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<C, T> ClipboardExporter<C, T>
where
    C: ClipboardPort + 'static,
    T: TimerPort + 'static,
{
    /// Create an exporter. `on_change` observes every flip of the copied flag.
    pub fn new(
        clipboard: C,
        timers: T,
        lookup: PromptLookup,
        reset_ms: u32,
        on_change: impl Fn(bool) + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                clipboard,
                timers,
                lookup,
                reset_ms,
                copied: Cell::new(false),
                pending_reset: RefCell::new(None),
                on_change: Box::new(on_change),
            }),
        }
    }

    #[allow(dead_code)]
    pub fn is_copied(&self) -> bool {
        self.inner.copied.get()
    }

    /// Copy the style prompt for `theme_name`.
    ///
    /// Resolves `true` only when the clipboard write succeeded. A theme with
    /// no prompt is a no-op: nothing is written and no acknowledgment shows.
    pub async fn copy(&self, theme_name: &str) -> bool {
        let Some(text) = (self.inner.lookup)(theme_name) else {
            console::debug(&format!("no style prompt for theme {:?}", theme_name));
            return false;
        };

        match self.inner.clipboard.write_text(text).await {
            Ok(()) => {
                self.acknowledge();
                true
            }
            Err(e) => {
                console::warn(&format!("copy failed: {}", e));
                false
            }
        }
    }

    /// Cancel a pending reset and lower the flag (unmount).
    pub fn cancel_pending(&self) {
        let pending = self.inner.pending_reset.borrow_mut().take();
        drop(pending);
        self.inner.set_copied(false);
    }

    fn acknowledge(&self) {
        self.inner.set_copied(true);

        let weak = Rc::downgrade(&self.inner);
        let handle = self.inner.timers.schedule(
            self.inner.reset_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.set_copied(false);
                }
            }),
        );

        // Replacing the handle drops (cancels) the superseded timer.
        let superseded = self.inner.pending_reset.borrow_mut().replace(handle);
        drop(superseded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ClipboardError;
    use crate::core::ports::Listener;

    #[derive(Clone, Default)]
    struct FakeClipboard {
        writes: Rc<RefCell<Vec<String>>>,
        reject: Rc<Cell<bool>>,
    }

    impl ClipboardPort for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            if self.reject.get() {
                return Err(ClipboardError::WriteRejected("NotAllowedError".into()));
            }
            self.writes.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct Scheduled {
        due_ms: u32,
        cancelled: Rc<Cell<bool>>,
        callback: Option<Box<dyn FnOnce()>>,
    }

    /// Manually advanced clock.
    #[derive(Clone, Default)]
    struct ManualTimers {
        now_ms: Rc<Cell<u32>>,
        queue: Rc<RefCell<Vec<Scheduled>>>,
    }

    impl ManualTimers {
        fn advance(&self, ms: u32) {
            let now = self.now_ms.get() + ms;
            self.now_ms.set(now);
            let due: Vec<_> = {
                let mut queue = self.queue.borrow_mut();
                queue
                    .iter_mut()
                    .filter(|s| s.due_ms <= now && !s.cancelled.get())
                    .filter_map(|s| s.callback.take())
                    .collect()
            };
            for callback in due {
                callback();
            }
        }

        fn live_timers(&self) -> usize {
            self.queue
                .borrow()
                .iter()
                .filter(|s| s.callback.is_some() && !s.cancelled.get())
                .count()
        }
    }

    impl TimerPort for ManualTimers {
        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.queue.borrow_mut().push(Scheduled {
                due_ms: self.now_ms.get() + delay_ms,
                cancelled: cancelled.clone(),
                callback: Some(callback),
            });
            Listener::new(move || cancelled.set(true))
        }
    }

    fn lookup(name: &str) -> Option<&'static str> {
        match name {
            "Midnight" => Some("dark navy, indigo accent"),
            _ => None,
        }
    }

    fn exporter(
        clipboard: &FakeClipboard,
        timers: &ManualTimers,
    ) -> (
        ClipboardExporter<FakeClipboard, ManualTimers>,
        Rc<RefCell<Vec<bool>>>,
    ) {
        let flips = Rc::new(RefCell::new(Vec::new()));
        let sink = flips.clone();
        let exporter = ClipboardExporter::new(
            clipboard.clone(),
            timers.clone(),
            lookup,
            2000,
            move |copied| sink.borrow_mut().push(copied),
        );
        (exporter, flips)
    }

    #[tokio::test]
    async fn test_copy_writes_once_and_acknowledges() {
        let clipboard = FakeClipboard::default();
        let timers = ManualTimers::default();
        let (exporter, flips) = exporter(&clipboard, &timers);

        assert!(exporter.copy("Midnight").await);
        assert_eq!(*clipboard.writes.borrow(), vec!["dark navy, indigo accent"]);
        assert!(exporter.is_copied());

        timers.advance(1999);
        assert!(exporter.is_copied());
        timers.advance(1);
        assert!(!exporter.is_copied());
        assert_eq!(*flips.borrow(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_unknown_theme_is_noop() {
        let clipboard = FakeClipboard::default();
        let timers = ManualTimers::default();
        let (exporter, flips) = exporter(&clipboard, &timers);

        assert!(!exporter.copy("Unknown").await);
        assert!(clipboard.writes.borrow().is_empty());
        assert!(!exporter.is_copied());
        assert!(flips.borrow().is_empty());
        assert_eq!(timers.live_timers(), 0);
    }

    #[tokio::test]
    async fn test_rejected_write_returns_false() {
        let clipboard = FakeClipboard::default();
        clipboard.reject.set(true);
        let timers = ManualTimers::default();
        let (exporter, _) = exporter(&clipboard, &timers);

        assert!(!exporter.copy("Midnight").await);
        assert!(!exporter.is_copied());
        assert_eq!(timers.live_timers(), 0);
    }

    #[tokio::test]
    async fn test_second_copy_cancels_first_reset() {
        let clipboard = FakeClipboard::default();
        let timers = ManualTimers::default();
        let (exporter, flips) = exporter(&clipboard, &timers);

        assert!(exporter.copy("Midnight").await);
        timers.advance(1500);
        assert!(exporter.copy("Midnight").await);
        assert_eq!(timers.live_timers(), 1);

        // The first timer would have fired here.
        timers.advance(500);
        assert!(exporter.is_copied());

        timers.advance(1500);
        assert!(!exporter.is_copied());
        assert_eq!(*flips.borrow(), vec![true, false]);
        assert_eq!(clipboard.writes.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_cancel_pending() {
        let clipboard = FakeClipboard::default();
        let timers = ManualTimers::default();
        let (exporter, _) = exporter(&clipboard, &timers);

        assert!(exporter.copy("Midnight").await);
        exporter.cancel_pending();
        assert!(!exporter.is_copied());
        assert_eq!(timers.live_timers(), 0);
    }
}
