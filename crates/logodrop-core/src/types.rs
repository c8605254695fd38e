//! Shared types for the logodrop upload widget.

use serde::{Deserialize, Serialize};

use crate::policy::ValidationPolicy;

/// A user-selected file waiting for validation or upload.
///
/// Exists only between selection and either rejection or handoff to the
/// upload client. A candidate built with [`FileCandidate::declared`]
/// carries only the picker's metadata, so it can be validated before the
/// contents are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    /// File name as reported by the picker (used for the multipart part).
    pub name: String,
    /// Declared MIME type, e.g. `"image/png"`. May be empty when the
    /// browser could not determine it.
    pub mime_type: String,
    /// Size in bytes, as declared by the picker or measured from `bytes`.
    pub size: u64,
    /// Raw file contents. Empty until read.
    pub bytes: Vec<u8>,
}

impl FileCandidate {
    /// Create a candidate from its full contents.
    #[must_use]
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size: bytes.len() as u64,
            bytes,
        }
    }

    /// Create a metadata-only candidate whose contents have not been read.
    #[must_use]
    pub fn declared(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
            bytes: Vec::new(),
        }
    }

    /// Attach the contents read after validation. The size becomes the
    /// measured length.
    #[must_use]
    pub fn with_bytes(self, bytes: Vec<u8>) -> Self {
        Self {
            size: bytes.len() as u64,
            bytes,
            ..self
        }
    }
}

/// Normalized outcome of one upload attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadResult {
    /// The server accepted the file and returned a public URL.
    Success {
        /// Resolved URL, already stripped of the API prefix.
        url: String,
    },
    /// The upload failed for any reason (transport, status, body).
    Failure {
        /// Human-readable cause, never empty.
        reason: String,
    },
}

impl UploadResult {
    /// Build a failure, substituting a generic reason for an empty one.
    #[must_use]
    pub fn failure(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        let reason = if reason.trim().is_empty() {
            String::from("unknown error")
        } else {
            reason
        };
        Self::Failure { reason }
    }

    /// Returns `true` for [`UploadResult::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Where and how the upload client submits files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Endpoint path, resolved against the client's base URL.
    pub endpoint: String,
    /// Multipart field name carrying the file.
    pub field_name: String,
    /// Server-internal routing prefix stripped from returned URLs.
    pub api_prefix: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from("/api/upload_image"),
            field_name: String::from("image"),
            api_prefix: String::from("/api/"),
        }
    }
}

/// Complete widget configuration: validation plus upload settings.
///
/// Host pages can embed this as JSON; missing keys fall back to the
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Client-side constraints applied before any network call.
    pub policy: ValidationPolicy,
    /// Upload endpoint settings.
    pub upload: UploadConfig,
}

impl WidgetConfig {
    /// Parse a configuration from JSON, filling in defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `json` is not a valid
    /// configuration object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
