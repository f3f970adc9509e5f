//! Theme registry: the ordered list of available skins.

use std::collections::HashSet;

use crate::core::error::RegistryError;

/// One visual skin, identified by its route path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Display name (e.g., "Midnight").
    pub name: String,
    /// Unique route path (e.g., "/midnight").
    pub path: String,
    /// Opaque CSS color value.
    pub accent_color: String,
    /// Opaque glyph shown next to the name.
    pub icon: String,
}

impl Theme {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        accent_color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            accent_color: accent_color.into(),
            icon: icon.into(),
        }
    }
}

/// Fixed, ordered sequence of themes.
///
/// Order defines cyclic navigation adjacency. A registry is never empty and
/// its paths are unique, so every lookup has a valid answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
}

impl ThemeRegistry {
    /// Build a registry, rejecting empty lists and duplicate paths.
    pub fn new(themes: Vec<Theme>) -> Result<Self, RegistryError> {
        if themes.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::with_capacity(themes.len());
        for theme in &themes {
            if !seen.insert(theme.path.as_str()) {
                return Err(RegistryError::DuplicatePath(theme.path.clone()));
            }
        }

        Ok(Self { themes })
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Theme> {
        self.themes.get(index)
    }

    /// Position of `path`, or 0 when the path is not registered.
    pub fn index_of(&self, path: &str) -> usize {
        self.themes
            .iter()
            .position(|t| t.path == path)
            .unwrap_or(0)
    }

    /// Theme displayed for `path`, falling back to the first entry.
    pub fn current(&self, path: &str) -> &Theme {
        &self.themes[self.index_of(path)]
    }
}
