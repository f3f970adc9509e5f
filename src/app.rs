//! Root application module.
//!
//! Contains the main App component, AppContext definition, SwitcherState,
//! and application-level setup logic following Leptos conventions.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::theme_registry;
use crate::core::{DrawerEvent, DrawerState, VisitedSet};
use crate::models::{ThemeRegistry, ThemeRoute};
use crate::utils::dom;

// ============================================================================
// SwitcherState
// ============================================================================

/// Transient widget state managed with Leptos signals.
///
/// None of this survives a reload except through the visited store, which
/// writes to localStorage on its own.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct SwitcherState {
    /// Theme grid open/closed.
    pub drawer: RwSignal<DrawerState>,
    /// Viewport is below the compact breakpoint.
    pub compact: RwSignal<bool>,
    /// Transient "copied" acknowledgment.
    pub copied: RwSignal<bool>,
    /// Session view of the visited set.
    pub visited: RwSignal<VisitedSet>,
    /// Size of the visited set, for the drawer header.
    pub visited_count: RwSignal<usize>,
}

impl SwitcherState {
    pub fn new() -> Self {
        Self {
            drawer: RwSignal::new(DrawerState::Closed),
            compact: RwSignal::new(false),
            copied: RwSignal::new(false),
            visited: RwSignal::new(VisitedSet::new()),
            visited_count: RwSignal::new(0),
        }
    }

    /// Feed an event into the drawer state machine.
    pub fn dispatch(&self, event: DrawerEvent) {
        let _ = self.drawer.try_update(|state| *state = state.apply(event));
    }

    pub fn is_open(&self) -> bool {
        self.drawer.get().is_open()
    }
}

impl Default for SwitcherState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read by child components
/// with `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Read-only theme registry.
    pub registry: StoredValue<Arc<ThemeRegistry>>,
    /// Route currently shown, kept in sync with the URL hash.
    pub route: RwSignal<ThemeRoute>,
    /// Theme switcher widget state.
    pub switcher: SwitcherState,
}

impl AppContext {
    pub fn new(registry: Arc<ThemeRegistry>) -> Self {
        Self {
            registry: StoredValue::new(registry),
            route: RwSignal::new(ThemeRoute::from_hash(&dom::get_hash())),
            switcher: SwitcherState::new(),
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary so a widget failure never blanks the page
/// - Renders the router (theme page plus switcher)
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(theme_registry());
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    position: fixed;
                    bottom: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    background: #151a35;
                    color: #ff6b6b;
                    font-family: system-ui, sans-serif;
                    font-size: 0.8rem;
                ">
                    {move || errors.get()
                        .into_iter()
                        .next()
                        .map(|(_, e)| format!("Theme switcher unavailable: {}", e))
                    }
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
