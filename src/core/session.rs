//! Navigation plus visited-set bookkeeping for one mounted widget.

use std::sync::Arc;

use super::navigation::NavigationController;
use super::ports::{RouterPort, StoragePort};
use super::visited::{VisitedSet, VisitedStore};
use crate::models::{Theme, ThemeRegistry};

/// Widget session state that outlives individual events.
///
/// The visited set is hydrated on [`SwitcherSession::mount`] and the active
/// route is recorded on every [`SwitcherSession::sync_route`], which the
/// widget calls whenever the router reports a route change.
pub struct SwitcherSession<R, S> {
    navigation: NavigationController<R>,
    store: VisitedStore<S>,
    visited: VisitedSet,
}

impl<R: RouterPort, S: StoragePort> SwitcherSession<R, S> {
    pub fn new(registry: Arc<ThemeRegistry>, router: R, store: VisitedStore<S>) -> Self {
        Self {
            navigation: NavigationController::new(registry, router),
            store,
            visited: VisitedSet::new(),
        }
    }

    /// Hydrate the visited set from storage and record the current route.
    pub fn mount(&mut self) -> &VisitedSet {
        self.visited = self.store.load();
        self.sync_route()
    }

    /// Record the displayed theme as visited and persist the set.
    ///
    /// Persists even when the path is already known, so storage catches up
    /// with the session after an earlier failed write.
    pub fn sync_route(&mut self) -> &VisitedSet {
        let path = self.current_theme().path.clone();
        self.visited = self.store.mark_visited(&path, &self.visited);
        &self.visited
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Number of visited themes, for the drawer header.
    pub fn visited_count(&self) -> usize {
        self.store.count(&self.visited)
    }

    pub fn registry(&self) -> &ThemeRegistry {
        self.navigation.registry()
    }

    #[allow(dead_code)]
    pub fn current_index(&self) -> usize {
        self.navigation.current_index()
    }

    pub fn current_theme(&self) -> &Theme {
        self.registry().current(&self.navigation.router().current_path())
    }

    pub fn next(&self) -> String {
        self.navigation.next()
    }

    pub fn prev(&self) -> String {
        self.navigation.prev()
    }

    pub fn select(&self, path: &str) {
        self.navigation.select(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::tests::{FakeRouter, abc_registry};
    use crate::core::visited::tests::MemoryStorage;
    use std::rc::Rc;

    fn session(
        router: &Rc<FakeRouter>,
        storage: &Rc<MemoryStorage>,
    ) -> SwitcherSession<Rc<FakeRouter>, Rc<MemoryStorage>> {
        SwitcherSession::new(
            abc_registry(),
            router.clone(),
            VisitedStore::new(storage.clone(), "visited"),
        )
    }

    #[test]
    fn test_next_next_prev_visits_everything() {
        let router = Rc::new(FakeRouter::at("/a"));
        let storage = Rc::new(MemoryStorage::default());
        let mut session = session(&router, &storage);
        session.mount();

        session.next();
        session.sync_route();
        session.next();
        session.sync_route();
        session.prev();
        session.sync_route();

        assert_eq!(session.current_index(), 1);
        assert_eq!(session.current_theme().name, "B");
        assert_eq!(*session.visited(), VisitedSet::from_iter(["/a", "/b", "/c"]));
        assert_eq!(session.visited_count(), 3);
    }

    #[test]
    fn test_visited_persists_across_mounts() {
        let router = Rc::new(FakeRouter::at("/a"));
        let storage = Rc::new(MemoryStorage::default());
        {
            let mut first = session(&router, &storage);
            first.mount();
            first.select("/c");
            first.sync_route();
        }

        router.navigate("/b");
        let mut second = session(&router, &storage);
        let visited = second.mount().clone();
        assert_eq!(visited, VisitedSet::from_iter(["/a", "/b", "/c"]));
    }

    #[test]
    fn test_works_without_storage() {
        let router = Rc::new(FakeRouter::at("/b"));
        let storage = Rc::new(MemoryStorage::default());
        storage.fail_reads.set(true);
        storage.fail_writes.set(true);

        let mut session = session(&router, &storage);
        session.mount();
        assert_eq!(session.visited_count(), 1);

        session.next();
        session.sync_route();
        assert_eq!(session.current_theme().name, "C");
        assert_eq!(session.visited_count(), 2);
    }

    #[test]
    fn test_revisit_persists_again() {
        let router = Rc::new(FakeRouter::at("/a"));
        let storage = Rc::new(MemoryStorage::default());
        let mut session = session(&router, &storage);

        storage.fail_writes.set(true);
        session.mount();
        assert!(storage.items.borrow().is_empty());

        // Same route again: the set is unchanged but is written this time.
        storage.fail_writes.set(false);
        session.sync_route();
        assert_eq!(
            storage.items.borrow().get("visited").map(String::as_str),
            Some(r#"["/a"]"#)
        );
    }

    #[test]
    fn test_unregistered_route_records_first_theme() {
        let router = Rc::new(FakeRouter::at("/"));
        let storage = Rc::new(MemoryStorage::default());
        let mut session = session(&router, &storage);
        assert!(session.mount().contains("/a"));
    }
}
