//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Style prompt text is loaded at compile time using `include_str!`.

use std::sync::{Arc, LazyLock};

use crate::models::{Theme, ThemeRegistry};

// =============================================================================
// Application Metadata
// =============================================================================

/// Site owner shown on the theme page stand-in.
pub const APP_NAME: &str = "portfolio";

// =============================================================================
// Storage Configuration
// =============================================================================

/// localStorage key holding the JSON array of visited theme paths.
pub const VISITED_STORAGE_KEY: &str = "theme-switcher:visited";

// =============================================================================
// Layout Configuration
// =============================================================================

/// Viewport widths strictly below this are the compact layout.
pub const COMPACT_BREAKPOINT_PX: f64 = 768.0;

// =============================================================================
// Gesture Configuration
// =============================================================================

/// Swipe classification thresholds.
pub mod gesture {
    /// Minimum horizontal travel (exclusive) for a swipe, in CSS pixels.
    pub const SWIPE_MIN_DISTANCE_PX: f64 = 40.0;
    /// Maximum duration (exclusive) for a swipe, in milliseconds.
    pub const SWIPE_MAX_DURATION_MS: f64 = 500.0;
}

// =============================================================================
// Clipboard Configuration
// =============================================================================

/// How long the "copied" acknowledgment stays visible.
pub const COPIED_RESET_MS: u32 = 2000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the widget.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Theme Registry
// =============================================================================

/// The configured themes, in navigation order.
///
/// The first entry is shown for any route that is not registered.
pub fn configured_themes() -> Vec<Theme> {
    vec![
        Theme::new("Midnight", "/midnight", "#6366f1", "☾"),
        Theme::new("Cipher", "/cipher", "#22c55e", "⌘"),
        Theme::new("Paper", "/paper", "#a8a29e", "✎"),
        Theme::new("Neon", "/neon", "#f0abfc", "✦"),
        Theme::new("Terminal", "/terminal", "#4ade80", "▮"),
        Theme::new("Brutalist", "/brutalist", "#facc15", "■"),
        Theme::new("Aurora", "/aurora", "#2dd4bf", "❋"),
        Theme::new("Sepia", "/sepia", "#b45309", "❦"),
        Theme::new("Blueprint", "/blueprint", "#38bdf8", "⌗"),
        Theme::new("Vaporwave", "/vaporwave", "#f472b6", "◭"),
    ]
}

static REGISTRY: LazyLock<Arc<ThemeRegistry>> = LazyLock::new(|| {
    Arc::new(
        ThemeRegistry::new(configured_themes()).expect("configured themes must form a valid registry"),
    )
});

/// Shared, read-only theme registry.
pub fn theme_registry() -> Arc<ThemeRegistry> {
    REGISTRY.clone()
}

// =============================================================================
// Style Prompts
// =============================================================================

/// Style prompt text for a theme name, if one is defined.
pub fn style_prompt(theme_name: &str) -> Option<&'static str> {
    let text = match theme_name {
        "Midnight" => include_str!("../assets/prompts/midnight.txt"),
        "Cipher" => include_str!("../assets/prompts/cipher.txt"),
        "Paper" => include_str!("../assets/prompts/paper.txt"),
        "Neon" => include_str!("../assets/prompts/neon.txt"),
        "Terminal" => include_str!("../assets/prompts/terminal.txt"),
        "Brutalist" => include_str!("../assets/prompts/brutalist.txt"),
        "Aurora" => include_str!("../assets/prompts/aurora.txt"),
        "Sepia" => include_str!("../assets/prompts/sepia.txt"),
        "Blueprint" => include_str!("../assets/prompts/blueprint.txt"),
        "Vaporwave" => include_str!("../assets/prompts/vaporwave.txt"),
        _ => return None,
    };
    Some(text)
}
