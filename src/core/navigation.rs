//! Cyclic navigation through the theme registry.

use std::sync::Arc;

use super::ports::RouterPort;
use crate::models::ThemeRegistry;
use crate::utils::console;

/// Index after `current`, wrapping to 0.
///
/// `count` must be non-zero. Debug builds assert this; release builds
/// return 0.
pub fn next_index(current: usize, count: usize) -> usize {
    debug_assert!(count > 0, "next_index called with an empty registry");
    if count == 0 {
        console::warn("navigation requested with an empty registry");
        return 0;
    }
    (current + 1) % count
}

/// Index before `current`, wrapping to `count - 1`.
pub fn prev_index(current: usize, count: usize) -> usize {
    debug_assert!(count > 0, "prev_index called with an empty registry");
    if count == 0 {
        console::warn("navigation requested with an empty registry");
        return 0;
    }
    (current % count + count - 1) % count
}

/// Requests route changes to adjacent or selected themes.
///
/// Every call navigates exactly once. Nothing is debounced or queued.
#[derive(Clone)]
pub struct NavigationController<R> {
    registry: Arc<ThemeRegistry>,
    router: R,
}

impl<R: RouterPort> NavigationController<R> {
    pub fn new(registry: Arc<ThemeRegistry>, router: R) -> Self {
        Self { registry, router }
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    /// Registry index of the displayed route (0 when unregistered).
    pub fn current_index(&self) -> usize {
        self.registry.index_of(&self.router.current_path())
    }

    /// Navigate to the next theme. Returns the target path.
    pub fn next(&self) -> String {
        let target = next_index(self.current_index(), self.registry.len());
        self.go_to_index(target)
    }

    /// Navigate to the previous theme. Returns the target path.
    pub fn prev(&self) -> String {
        let target = prev_index(self.current_index(), self.registry.len());
        self.go_to_index(target)
    }

    /// Navigate to an explicit registry path.
    pub fn select(&self, path: &str) {
        self.router.navigate(path);
    }

    fn go_to_index(&self, index: usize) -> String {
        let path = self
            .registry
            .get(index)
            .map(|t| t.path.clone())
            .unwrap_or_else(|| self.registry.themes()[0].path.clone());
        self.router.navigate(&path);
        path
    }
}
