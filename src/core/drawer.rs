//! Theme drawer state machine.
//!
//! The drawer is either [`DrawerState::Closed`] or [`DrawerState::Open`].
//! While open, global dismiss listeners (outside pointer-down, Escape) are
//! registered, and in the compact layout document scroll is locked.
//! [`DrawerResources`] owns those side effects and keeps them in step with
//! the state: at most one set of listeners and at most one scroll lock.

use super::ports::Listener;

/// Open/closed state of the theme grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

/// Inputs that drive the drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerEvent {
    /// Trigger button pressed.
    Toggle,
    /// Pointer-down outside the drawer subtree.
    OutsideClick,
    /// Escape key pressed.
    Escape,
    /// A theme was picked from the grid.
    ThemeSelected,
}

impl DrawerState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Next state after `event`. Dismiss events on a closed drawer are no-ops.
    pub fn apply(self, event: DrawerEvent) -> Self {
        match (self, event) {
            (Self::Closed, DrawerEvent::Toggle) => Self::Open,
            (Self::Open, DrawerEvent::Toggle) => Self::Closed,
            (Self::Open, DrawerEvent::OutsideClick)
            | (Self::Open, DrawerEvent::Escape)
            | (Self::Open, DrawerEvent::ThemeSelected) => Self::Closed,
            (Self::Closed, _) => Self::Closed,
        }
    }
}

/// Browser side effects the drawer needs while open.
pub trait DrawerEnv {
    /// Register the outside-click and Escape listeners.
    fn attach_dismiss_listeners(&self) -> Listener;

    /// Suppress document scroll. The guard restores it.
    fn lock_scroll(&self) -> Listener;
}

/// Listener and scroll-lock guards held on behalf of the drawer.
pub struct DrawerResources<E> {
    env: E,
    dismiss: Option<Listener>,
    scroll_lock: Option<Listener>,
}

impl<E: DrawerEnv> DrawerResources<E> {
    pub fn new(env: E) -> Self {
        Self {
            env,
            dismiss: None,
            scroll_lock: None,
        }
    }

    /// Bring guards in line with `state` and the layout. Idempotent.
    pub fn sync(&mut self, state: DrawerState, compact: bool) {
        if state.is_open() {
            if self.dismiss.is_none() {
                self.dismiss = Some(self.env.attach_dismiss_listeners());
            }
        } else if let Some(listener) = self.dismiss.take() {
            listener.detach();
        }

        if state.is_open() && compact {
            if self.scroll_lock.is_none() {
                self.scroll_lock = Some(self.env.lock_scroll());
            }
        } else if let Some(lock) = self.scroll_lock.take() {
            lock.detach();
        }
    }

    /// Release every guard (unmount).
    pub fn release(&mut self) {
        self.sync(DrawerState::Closed, false);
    }

    #[allow(dead_code)]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Counters {
        listeners: Cell<i32>,
        locks: Cell<i32>,
        restores: Cell<i32>,
        max_listeners: Cell<i32>,
        max_locks: Cell<i32>,
    }

    #[derive(Clone, Default)]
    struct FakeEnv(Rc<Counters>);

    impl DrawerEnv for FakeEnv {
        fn attach_dismiss_listeners(&self) -> Listener {
            let c = self.0.clone();
            c.listeners.set(c.listeners.get() + 1);
            c.max_listeners.set(c.max_listeners.get().max(c.listeners.get()));
            Listener::new(move || c.listeners.set(c.listeners.get() - 1))
        }

        fn lock_scroll(&self) -> Listener {
            let c = self.0.clone();
            c.locks.set(c.locks.get() + 1);
            c.max_locks.set(c.max_locks.get().max(c.locks.get()));
            Listener::new(move || {
                c.locks.set(c.locks.get() - 1);
                c.restores.set(c.restores.get() + 1);
            })
        }
    }

    #[test]
    fn test_transitions() {
        use DrawerEvent::*;
        use DrawerState::*;

        assert_eq!(Closed.apply(Toggle), Open);
        assert_eq!(Open.apply(Toggle), Closed);
        assert_eq!(Open.apply(OutsideClick), Closed);
        assert_eq!(Open.apply(Escape), Closed);
        assert_eq!(Open.apply(ThemeSelected), Closed);
        assert_eq!(Closed.apply(OutsideClick), Closed);
        assert_eq!(Closed.apply(Escape), Closed);
        assert_eq!(Closed.apply(ThemeSelected), Closed);
    }

    #[test]
    fn test_initial_state_closed() {
        assert_eq!(DrawerState::default(), DrawerState::Closed);
    }

    #[test]
    fn test_listeners_scoped_to_open() {
        let env = FakeEnv::default();
        let mut resources = DrawerResources::new(env.clone());

        resources.sync(DrawerState::Closed, false);
        assert_eq!(env.0.listeners.get(), 0);

        resources.sync(DrawerState::Open, false);
        resources.sync(DrawerState::Open, false);
        assert_eq!(env.0.listeners.get(), 1);

        resources.sync(DrawerState::Closed, false);
        assert_eq!(env.0.listeners.get(), 0);
        assert_eq!(env.0.max_listeners.get(), 1);
    }

    #[test]
    fn test_scroll_lock_only_in_compact_layout() {
        let env = FakeEnv::default();
        let mut resources = DrawerResources::new(env.clone());

        resources.sync(DrawerState::Open, false);
        assert!(!resources.is_scroll_locked());

        resources.sync(DrawerState::Open, true);
        assert!(resources.is_scroll_locked());

        resources.sync(DrawerState::Open, false);
        assert!(!resources.is_scroll_locked());
        assert_eq!(env.0.restores.get(), 1);
    }

    #[test]
    fn test_rapid_toggle_never_stacks_locks() {
        let env = FakeEnv::default();
        let mut resources = DrawerResources::new(env.clone());
        let mut state = DrawerState::Closed;

        for _ in 0..25 {
            state = state.apply(DrawerEvent::Toggle);
            resources.sync(state, true);
            resources.sync(state, true);
        }

        assert_eq!(env.0.max_locks.get(), 1);
        assert_eq!(env.0.max_listeners.get(), 1);
        // 13 opens, 12 closes: the final open still holds its lock.
        assert_eq!(env.0.restores.get(), 12);
        resources.release();
        assert_eq!(env.0.restores.get(), 13);
        assert_eq!(env.0.locks.get(), 0);
        assert_eq!(env.0.listeners.get(), 0);
    }

    #[test]
    fn test_drop_releases_guards() {
        let env = FakeEnv::default();
        {
            let mut resources = DrawerResources::new(env.clone());
            resources.sync(DrawerState::Open, true);
        }
        assert_eq!(env.0.listeners.get(), 0);
        assert_eq!(env.0.locks.get(), 0);
    }
}
