//! Preview image state and local data-URI encoding.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// The image source the widget currently displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PreviewState {
    /// Nothing selected and no existing URL.
    #[default]
    Empty,
    /// Client-side preview of a just-selected file (`data:` URI).
    LocalPreview(String),
    /// The resolved URL of an uploaded (or pre-existing) image.
    RemotePreview(String),
}

impl PreviewState {
    /// Image source for an `<img>` element, or `None` when empty.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::LocalPreview(uri) | Self::RemotePreview(uri) => Some(uri),
        }
    }

    /// Returns `true` when showing a server-resolved URL.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::RemotePreview(_))
    }
}

impl fmt::Display for PreviewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty"),
            Self::LocalPreview(_) => f.write_str("local preview"),
            Self::RemotePreview(url) => write!(f, "remote preview ({url})"),
        }
    }
}

/// Encode file bytes as a `data:` URI suitable for an `<img src>`.
///
/// An empty MIME type falls back to `application/octet-stream`, which
/// browsers still render when the payload is a recognizable image.
#[must_use]
pub fn data_uri(mime_type: &str, bytes: &[u8]) -> String {
    let mime = if mime_type.is_empty() {
        "application/octet-stream"
    } else {
        mime_type
    };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}
