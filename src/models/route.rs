//! Hash-based theme routes.
//!
//! URL format: `#/midnight` maps to the theme path `/midnight`.

/// Theme route derived from the URL hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeRoute {
    path: String,
}

impl ThemeRoute {
    /// Parse a URL hash into a route.
    ///
    /// An empty hash (or `#/`) yields the root path `/`, which the registry
    /// resolves to its first entry.
    pub fn from_hash(hash: &str) -> Self {
        let trimmed = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');
        Self {
            path: format!("/{}", trimmed),
        }
    }

    /// Route for a registry path (`/midnight`).
    pub fn from_path(path: &str) -> Self {
        Self::from_hash(path)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Convert to a URL hash.
    pub fn to_hash(&self) -> String {
        format!("#{}", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(ThemeRoute::from_hash("").path(), "/");
        assert_eq!(ThemeRoute::from_hash("#").path(), "/");
        assert_eq!(ThemeRoute::from_hash("#/").path(), "/");
        assert_eq!(ThemeRoute::from_hash("#/midnight").path(), "/midnight");
        assert_eq!(ThemeRoute::from_hash("#/midnight/").path(), "/midnight");
        assert_eq!(ThemeRoute::from_hash("/cipher").path(), "/cipher");
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(ThemeRoute::from_path("/midnight").to_hash(), "#/midnight");
        assert_eq!(ThemeRoute::from_hash("").to_hash(), "#/");
    }
}
