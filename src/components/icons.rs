//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCheck as Check, LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuClipboard as Clipboard, LuEye as Visited, LuPalette as Palette, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCheck2 as Check, BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight,
        BsClipboard as Clipboard, BsEyeFill as Visited, BsPalette as Palette, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CLIPBOARD, Clipboard);
themed_icon!(CHECK, Check);
themed_icon!(CLOSE, Close);
themed_icon!(VISITED, Visited);
themed_icon!(PALETTE, Palette);
