//! Global keyboard shortcuts for theme navigation.

/// Action bound to a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Prev,
    Next,
}

/// Modifier and focus context of a key press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyContext {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    /// Focus is in an input, textarea, select or contenteditable element.
    pub editing: bool,
}

impl KeyCommand {
    /// Map a `KeyboardEvent.key` value to a command.
    ///
    /// Modified presses and presses while typing are left to the browser.
    pub fn from_key(key: &str, ctx: KeyContext) -> Option<Self> {
        if ctx.ctrl || ctx.meta || ctx.alt || ctx.editing {
            return None;
        }
        match key {
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Whether an element with this tag name accepts text input.
pub fn is_editable_tag(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_lowercase().as_str(),
        "input" | "textarea" | "select"
    )
}
