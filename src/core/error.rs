//! Error types for the theme switcher.
//!
//! Every error here is recoverable. The public widget operations log and
//! swallow them so that a broken browser capability never takes the page down.
//!
//! - [`StorageError`] - localStorage reads and writes for the visited set
//! - [`ClipboardError`] - clipboard writes for the style prompt export
//! - [`RegistryError`] - invalid theme registry configuration

use thiserror::Error;

/// Errors from the durable storage capability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Storage not available (privacy mode, disabled, no window).
    #[error("storage not available")]
    Unavailable,
    /// The backend refused the read.
    #[error("failed to read from storage")]
    ReadFailed,
    /// The backend refused the write (quota exceeded, etc.).
    #[error("failed to write to storage")]
    WriteFailed,
    /// Failed to encode the value as JSON.
    #[error("failed to serialize value: {0}")]
    Serialize(String),
}

/// Errors from the clipboard capability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No clipboard API in this browser or context.
    #[error("clipboard not available")]
    Unavailable,
    /// The write promise rejected (permission denied, document not focused).
    #[error("clipboard write rejected: {0}")]
    WriteRejected(String),
}

/// Theme registry configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A registry must contain at least one theme.
    #[error("theme registry is empty")]
    Empty,
    /// Two themes share the same route path.
    #[error("duplicate theme path: {0}")]
    DuplicatePath(String),
}
