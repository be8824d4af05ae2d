//! Error types for the desktop engine
//!
//! Runtime operations on unknown ids are silent no-ops, so errors only come
//! out of construction and configuration parsing.

use crate::types::{IconId, WindowId};

/// Errors that can occur while building a desktop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// Two catalogue entries declared the same window id
    DuplicateWindow(WindowId),

    /// Two catalogue entries declared the same icon id
    DuplicateIcon(IconId),

    /// An icon or the gallery host names neither a window nor a launcher
    UnknownTarget(WindowId),

    /// The gallery was configured with no images
    EmptyGallery,

    /// A configuration value is out of range
    InvalidConfig {
        /// The offending field
        field: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateWindow(id) => write!(f, "duplicate window id: {}", id),
            Self::DuplicateIcon(id) => write!(f, "duplicate icon id: {}", id),
            Self::UnknownTarget(id) => write!(f, "no window or launcher named: {}", id),
            Self::EmptyGallery => write!(f, "gallery has no images"),
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config '{}': {}", field, reason)
            }
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;
