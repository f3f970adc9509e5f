//! Durable record of visited theme paths.
//!
//! The set is stored under a single key as a JSON array of path strings:
//! `["/midnight","/cipher"]`. Storage is advisory: every failure degrades to
//! an empty set (on read) or a no-op (on write) and is logged, never raised.

use std::collections::BTreeSet;

use serde_json::Value;

use super::error::StorageError;
use super::ports::StoragePort;
use crate::utils::console;

/// Set of visited theme paths. Grows monotonically within a session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisitedSet(BTreeSet<String>);

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains(path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A copy of this set with `path` added.
    pub fn with(&self, path: &str) -> Self {
        let mut next = self.0.clone();
        next.insert(path.to_string());
        Self(next)
    }

    fn to_json(&self) -> Result<String, StorageError> {
        serde_json::to_string(&self.0).map_err(|e| StorageError::Serialize(e.to_string()))
    }

    /// Parse a stored payload. Anything but a JSON array yields `None`;
    /// non-string array entries are skipped.
    fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(raw).ok()? {
            Value::Array(items) => Some(Self(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(path) => Some(path),
                        _ => None,
                    })
                    .collect(),
            )),
            _ => None,
        }
    }
}

impl<S: Into<String>> FromIterator<S> for VisitedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Loads and persists the [`VisitedSet`] through a [`StoragePort`].
#[derive(Clone)]
pub struct VisitedStore<S> {
    storage: S,
    key: String,
}

impl<S: StoragePort> VisitedStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Read the persisted set. Never fails: absent, unreadable or malformed
    /// data all yield an empty set.
    pub fn load(&self) -> VisitedSet {
        match self.storage.get(&self.key) {
            Ok(Some(raw)) => VisitedSet::from_json(&raw).unwrap_or_else(|| {
                console::warn("ignoring malformed visited-theme data");
                VisitedSet::new()
            }),
            Ok(None) => VisitedSet::new(),
            Err(e) => {
                console::debug(&format!("visited themes unavailable: {}", e));
                VisitedSet::new()
            }
        }
    }

    /// Return `current` plus `path`, persisting the result best-effort.
    pub fn mark_visited(&self, path: &str, current: &VisitedSet) -> VisitedSet {
        let next = current.with(path);
        if let Err(e) = self.persist(&next) {
            console::warn(&format!("could not save visited themes: {}", e));
        }
        next
    }

    /// Number of visited themes, for display.
    pub fn count(&self, set: &VisitedSet) -> usize {
        set.len()
    }

    fn persist(&self, set: &VisitedSet) -> Result<(), StorageError> {
        let json = set.to_json()?;
        self.storage.set(&self.key, &json)
    }
}
