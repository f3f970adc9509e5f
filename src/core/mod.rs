//! Core logic of the theme switcher, independent of the DOM.
//!
//! This module provides:
//! - [`NavigationController`] cyclic prev/next navigation
//! - [`VisitedStore`] durable visited-theme tracking
//! - [`ViewportClassifier`] compact-layout detection
//! - [`GestureDetector`] swipe classification
//! - [`DrawerState`] and [`DrawerResources`] for the theme grid
//! - [`ClipboardExporter`] style prompt export
//! - [`SwitcherSession`] composing navigation with the visited set
//!
//! Browser APIs are reached only through the traits in [`ports`].

mod clipboard;
mod drawer;
pub mod error;
mod gesture;
mod keyboard;
mod navigation;
pub mod ports;
mod session;
mod viewport;
mod visited;

pub use clipboard::{ClipboardExporter, PromptLookup};
pub use drawer::{DrawerEnv, DrawerEvent, DrawerResources, DrawerState};
pub use gesture::{GestureDetector, GestureThresholds, SwipeDirection};
pub use keyboard::{KeyCommand, KeyContext, is_editable_tag};
pub use navigation::{NavigationController, next_index, prev_index};
pub use session::SwitcherSession;
pub use viewport::{Subscription, ViewportClassifier};
pub use visited::{VisitedSet, VisitedStore};
